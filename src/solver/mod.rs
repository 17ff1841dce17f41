mod frontier;
mod node;

use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashMap;
use log::debug;

use crate::board::Board;
use crate::config::Method;
use crate::moves::DIRECTIONS;
use crate::Solve;

use self::frontier::Frontier;
use self::node::SearchNode;
pub use self::node::Stats;

pub struct SolverOk {
    /// Boards from the start to the goal inclusive, None if the goal can't be reached.
    pub path: Option<Vec<Board>>,
    pub stats: Stats,
    pub(crate) method: Method,
}

impl SolverOk {
    fn new(path: Option<Vec<Board>>, stats: Stats, method: Method) -> Self {
        Self {
            path,
            stats,
            method,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.path {
            None => writeln!(f, "No solution")?,
            Some(ref path) => writeln!(f, "{}: {} moves", self.method, path.len() - 1)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Board {
    fn solve(&self, goal: &Board, method: Method, print_status: bool) -> SolverOk {
        debug!("Search called");
        search(self, goal, method, print_status)
    }
}

fn search(start: &Board, goal: &Board, method: Method, print_status: bool) -> SolverOk {
    let mut stats = Stats::new();

    let mut to_visit = Frontier::new(method);
    let mut prevs = FnvHashMap::default();

    let root = SearchNode::new(*start, 0);
    stats.add_created(&root);
    // the start has no prev - mapping it to itself avoids an Option
    prevs.insert(*start, *start);
    to_visit.push(root);

    while let Some(cur_node) = to_visit.pop() {
        if stats.add_unique_visited(&cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }

        if cur_node.board == *goal {
            debug!("Solved, backtracking path");
            return SolverOk::new(
                Some(backtrack_path(&prevs, &cur_node.board)),
                stats,
                method,
            );
        }

        for successor in expand(&cur_node.board) {
            let next_node = SearchNode::new(successor, cur_node.dist + 1);
            // mark boards visited when inserting into the frontier, not when
            // expanding - a board reachable by two move orders would
            // otherwise be queued twice
            if prevs.contains_key(&successor) {
                stats.add_reached_duplicate(&next_node);
                continue;
            }
            prevs.insert(successor, cur_node.board);
            stats.add_created(&next_node);
            to_visit.push(next_node);
        }
    }

    debug!("Exhausted the reachable state space");
    SolverOk::new(None, stats, method)
}

/// Boards one slide away, always in up, down, left, right order.
fn expand(board: &Board) -> Vec<Board> {
    let mut new_boards = Vec::new();
    for &dir in &DIRECTIONS {
        if let Some(new_board) = board.slide(dir) {
            new_boards.push(new_board);
        }
    }
    new_boards
}

fn backtrack_path(prevs: &FnvHashMap<Board, Board>, final_board: &Board) -> Vec<Board> {
    let mut ret = Vec::new();
    let mut board = final_board;
    loop {
        ret.push(*board);
        let prev = &prevs[board];
        if prev == board {
            ret.reverse();
            return ret;
        }
        board = prev;
    }
}
