use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::{FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};

use crate::board::Board;

/// Renders a board as a 3x3 grid with box drawing characters,
/// the blank as an empty cell.
pub struct BoardFormatter<'a> {
    board: &'a Board,
}

impl<'a> BoardFormatter<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        BoardFormatter { board }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(grid_format());
        for row in self.board.tiles().chunks(3) {
            let cells = row
                .iter()
                .map(|&tile| {
                    if tile == 0 {
                        Cell::new(" ")
                    } else {
                        Cell::new(&tile.to_string())
                    }
                })
                .collect();
            table.add_row(Row::new(cells));
        }
        table
    }
}

fn grid_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separator(LinePosition::Top, LineSeparator::new('─', '┬', '┌', '┐'))
        .separator(LinePosition::Intern, LineSeparator::new('─', '┼', '├', '┤'))
        .separator(LinePosition::Bottom, LineSeparator::new('─', '┴', '└', '┘'))
        .padding(1, 1)
        .build()
}

impl<'a> Display for BoardFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table())
    }
}

impl<'a> Debug for BoardFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
