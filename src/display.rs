use crate::board::Board;
use crate::camp::Camp;
use crate::location::Location;
use std::fmt::{Display, Formatter};

/// Renders a borrowed board as a textual grid with row and column headers,
/// coloring each glyph by camp: green for Cho, red for Han. Presentation
/// only; the board itself exposes nothing but structured data.
pub struct BoardDisplay<'a> {
    board: &'a Board,
    color: bool,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board, color: true }
    }

    pub fn plain(board: &'a Board) -> Self {
        Self {
            board,
            color: false,
        }
    }
}

impl Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..Board::WIDTH {
            write!(f, " {col} ")?;
        }
        writeln!(f)?;

        for row in 0..Board::HEIGHT {
            write!(f, "{row} ")?;

            for col in 0..Board::WIDTH {
                let location = Location::new(row, col).unwrap();
                match self.board[location] {
                    Some(piece) => {
                        let glyph = piece.glyph();
                        match piece.camp() {
                            Camp::Cho if self.color => write!(f, "\x1B[32m{glyph}\x1B[0m ")?,
                            Camp::Han if self.color => write!(f, "\x1B[31m{glyph}\x1B[0m ")?,
                            _ => write!(f, "{glyph} ")?,
                        }
                    }
                    None => write!(f, "   ")?,
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
