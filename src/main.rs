use std::error::Error;
use std::process;

use clap::{App, Arg, ArgGroup};

use eight_puzzle_solver::board::Board;
use eight_puzzle_solver::config::Method;
use eight_puzzle_solver::generator;
use eight_puzzle_solver::moves::path_moves;
use eight_puzzle_solver::Solve;

fn main() {
    env_logger::init();

    let matches = App::new("eight-puzzle-solver")
        .version("0.1")
        .arg(
            Arg::with_name("bfs")
                .short("-b")
                .long("--bfs")
                .help("breadth-first search - always finds a shortest solution"),
        )
        .arg(
            Arg::with_name("dfs")
                .short("-d")
                .long("--dfs")
                .help("depth-first search - finds some solution, usually a long one"),
        )
        .group(ArgGroup::with_name("method").arg("bfs").arg("dfs").required(true))
        .arg(
            Arg::with_name("status")
                .short("-s")
                .long("--status")
                .help("print progress whenever the search reaches a new depth"),
        )
        .arg(
            Arg::with_name("tiles")
                .help("start position as 9 comma separated tiles, 0 is the blank (random when omitted)"),
        )
        .get_matches();

    let method = if matches.is_present("dfs") {
        Method::Dfs
    } else {
        Method::Bfs
    };

    let start = match matches.value_of("tiles") {
        Some(tiles) => parse_tiles(tiles).unwrap_or_else(|err| {
            println!("Bad start position {}: {}", tiles, err);
            process::exit(1);
        }),
        None => generator::random_solvable_board(&mut rand::thread_rng()),
    };
    let goal = Board::solved();

    println!("Start position:");
    println!("{}", start.format());

    println!("Solving using {}...", method);
    let solver_ok = start.solve(&goal, method, matches.is_present("status"));
    println!("{}", solver_ok.stats);
    match solver_ok.path {
        Some(path) => {
            println!("Found solution:");
            for (step, board) in path.iter().enumerate() {
                println!("Step {}:", step + 1);
                println!("{}", board.format());
            }
            let moves = path_moves(&path);
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
        }
        None => println!("No solution"),
    }
}

fn parse_tiles(input: &str) -> Result<Board, Box<dyn Error>> {
    let values = input
        .split(',')
        .map(|tile| tile.trim().parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()?;
    if values.len() != 9 {
        return Err(format!("expected 9 tiles, got {}", values.len()).into());
    }

    let mut tiles = [0; 9];
    tiles.copy_from_slice(&values);
    Ok(Board::new(tiles)?)
}
