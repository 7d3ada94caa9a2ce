use crate::camp::Camp;
use crate::error::{JanggiError, JanggiResult};
use crate::formation::Formation;
use crate::location::Location;
use crate::piece::{Piece, PieceType};
use std::ops::{Index, IndexMut};

/// The 10×9 board: a row-major grid of optional pieces plus the formation
/// and bottom-camp metadata recorded at assembly. Cloning yields a fully
/// independent grid.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Vec<Option<Piece>>,
    cho_formation: Formation,
    han_formation: Formation,
    bottom_camp: Camp,
}

impl Board {
    pub const WIDTH: i8 = 9;
    pub const HEIGHT: i8 = 10;

    /// Creates an empty board carrying the given assembly metadata.
    pub fn new(cho_formation: Formation, han_formation: Formation, bottom_camp: Camp) -> Self {
        Self {
            cells: vec![None; (Self::WIDTH * Self::HEIGHT) as usize],
            cho_formation,
            han_formation,
            bottom_camp,
        }
    }

    /// Assembles a full opening board: one half-board template per camp,
    /// camps marked, the non-bottom half rotated 180°, both merged. The two
    /// camps always end up point-symmetric about the board center.
    pub fn from_formations(
        cho_formation: Formation,
        han_formation: Formation,
        bottom_camp: Camp,
    ) -> Self {
        let mut board = Self::new(cho_formation, han_formation, bottom_camp);
        let mut cho_half = Self::half_board(cho_formation);
        let mut han_half = Self::half_board(han_formation);
        cho_half.mark_camp(Camp::Cho);
        han_half.mark_camp(Camp::Han);

        if bottom_camp == Camp::Cho {
            han_half.flip();
        } else {
            cho_half.flip();
        }

        board.merge(&cho_half);
        board.merge(&han_half);
        board
    }

    /// Parses the board portion of a notation string: 10 `/`-separated rows,
    /// a digit meaning that many empty cells and a letter meaning one piece.
    /// Anything after the first whitespace is ignored.
    pub fn from_notation(
        cho_formation: Formation,
        han_formation: Formation,
        notation: &str,
        bottom_camp: Camp,
    ) -> JanggiResult<Self> {
        let mut board = Self::new(cho_formation, han_formation, bottom_camp);
        let portion = notation.split_whitespace().next().unwrap_or("");
        let rows: Vec<&str> = portion.split('/').collect();

        if rows.len() != Self::HEIGHT as usize {
            return Err(JanggiError::WrongRowCount { rows: rows.len() });
        }

        for (row, text) in rows.iter().enumerate() {
            let mut cells = 0;
            for value in text.chars() {
                if let Some(run) = value.to_digit(10) {
                    cells += run as usize;
                } else {
                    let piece = Piece::from_letter(value)
                        .ok_or(JanggiError::UnknownPieceLetter { row, letter: value })?;
                    // an overlong row is not written past its end; it still
                    // fails the count check below
                    if cells < Self::WIDTH as usize {
                        board.cells[row * Self::WIDTH as usize + cells] = Some(piece);
                    }
                    cells += 1;
                }
            }

            if cells != Self::WIDTH as usize {
                return Err(JanggiError::WrongCellCount { row, cells });
            }
        }

        Ok(board)
    }

    /// Serializes the grid back into the 10-row digit-run notation form.
    pub fn notation(&self) -> String {
        let mut result = String::new();

        for row in 0..Self::HEIGHT {
            if row > 0 {
                result.push('/');
            }

            let mut empty = 0u8;
            for col in 0..Self::WIDTH {
                match self.cells[(row * Self::WIDTH + col) as usize] {
                    Some(piece) => {
                        if empty > 0 {
                            result.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        result.push(piece.letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                result.push((b'0' + empty) as char);
            }
        }

        result
    }

    /// The single-camp template, authored for the bottom half of the board.
    /// The formation decides which of the four back-rank flank squares hold
    /// horses and which hold elephants.
    fn half_board(formation: Formation) -> Self {
        let mut board = Self::new(Formation::Undecided, Formation::Undecided, Camp::Undecided);

        board.put_kind(6, 0, PieceType::Soldier);
        board.put_kind(6, 2, PieceType::Soldier);
        board.put_kind(6, 4, PieceType::Soldier);
        board.put_kind(6, 6, PieceType::Soldier);
        board.put_kind(6, 8, PieceType::Soldier);

        board.put_kind(7, 1, PieceType::Cannon);
        board.put_kind(7, 7, PieceType::Cannon);

        board.put_kind(8, 4, PieceType::General);

        board.put_kind(9, 3, PieceType::Guard);
        board.put_kind(9, 5, PieceType::Guard);

        board.put_kind(9, 0, PieceType::Chariot);
        board.put_kind(9, 8, PieceType::Chariot);

        match formation {
            Formation::OuterElephant => {
                board.put_kind(9, 1, PieceType::Elephant);
                board.put_kind(9, 2, PieceType::Horse);
                board.put_kind(9, 6, PieceType::Horse);
                board.put_kind(9, 7, PieceType::Elephant);
            }
            Formation::LeftElephant => {
                board.put_kind(9, 1, PieceType::Elephant);
                board.put_kind(9, 2, PieceType::Horse);
                board.put_kind(9, 6, PieceType::Elephant);
                board.put_kind(9, 7, PieceType::Horse);
            }
            Formation::RightElephant => {
                board.put_kind(9, 1, PieceType::Horse);
                board.put_kind(9, 2, PieceType::Elephant);
                board.put_kind(9, 6, PieceType::Horse);
                board.put_kind(9, 7, PieceType::Elephant);
            }
            Formation::InnerElephant => {
                board.put_kind(9, 1, PieceType::Horse);
                board.put_kind(9, 2, PieceType::Elephant);
                board.put_kind(9, 6, PieceType::Elephant);
                board.put_kind(9, 7, PieceType::Horse);
            }
            Formation::Undecided => {}
        }

        board
    }

    fn put_kind(&mut self, row: i8, col: i8, kind: PieceType) {
        self.cells[(row * Self::WIDTH + col) as usize] = Some(Piece::new(kind));
    }

    pub fn put(&mut self, location: Location, piece: Piece) {
        self.cells[location.index()] = Some(piece);
    }

    pub fn remove(&mut self, location: Location) {
        self.cells[location.index()] = None;
    }

    /// Moves the piece at `origin` to `dest` and returns the previous
    /// occupant of `dest`, if any. Fails when `origin` is empty. Performs no
    /// legality checking; callers decide legality from `leaper_destinations`
    /// or their own movement rules first.
    pub fn relocate(&mut self, origin: Location, dest: Location) -> JanggiResult<Option<Piece>> {
        let piece = self.cells[origin.index()]
            .take()
            .ok_or(JanggiError::EmptyOrigin { origin })?;
        Ok(self.cells[dest.index()].replace(piece))
    }

    /// Overwrites every cell occupied in `other` into this board. Cells
    /// empty in `other` are left untouched.
    pub fn merge(&mut self, other: &Board) {
        for (cell, source) in self.cells.iter_mut().zip(&other.cells) {
            if source.is_some() {
                *cell = *source;
            }
        }
    }

    /// Rotates the grid 180° in place. Reversing the row-major cells is
    /// exactly the (r, c) -> (9-r, 8-c) point reflection.
    pub fn flip(&mut self) {
        self.cells.reverse();
    }

    /// Assigns `camp` to every piece currently on the board.
    pub fn mark_camp(&mut self, camp: Camp) {
        for cell in self.cells.iter_mut() {
            if let Some(piece) = cell {
                piece.set_camp(camp);
            }
        }
    }

    /// Total material value of the given camp's pieces.
    pub fn score(&self, camp: Camp) -> i32 {
        self.cells
            .iter()
            .flatten()
            .filter(|piece| piece.camp() == camp)
            .map(|piece| piece.value())
            .sum()
    }

    /// Every occupied square in row-major order.
    pub fn piece_locations(&self) -> Vec<Location> {
        Location::iter().filter(|&location| self[location].is_some()).collect()
    }

    /// Every square occupied by the given camp, in row-major order.
    pub fn piece_locations_for(&self, camp: Camp) -> Vec<Location> {
        Location::iter()
            .filter(|&location| matches!(self[location], Some(piece) if piece.camp() == camp))
            .collect()
    }

    /// One scan for check detection: where `camp`'s general stands and where
    /// every opposing piece stands. Whether any threat actually reaches the
    /// general is left to the caller's movement rules.
    pub fn general_and_threats(&self, camp: Camp) -> (Option<Location>, Vec<Location>) {
        let mut general = None;
        let mut threats = Vec::new();

        for location in Location::iter() {
            let Some(piece) = self[location] else { continue };
            if piece.camp() != camp {
                threats.push(location);
            } else if piece.kind() == PieceType::General {
                general = Some(location);
            }
        }

        (general, threats)
    }

    /// Legal destinations for the leaper at `origin`: each jump pattern is
    /// walked step by step, every intermediate square must be on-board and
    /// empty, and the final square must not hold a same-camp piece. Returns
    /// nothing for an empty origin or a non-leaper occupant.
    pub fn leaper_destinations(&self, origin: Location) -> Vec<Location> {
        let Some(piece) = self[origin] else {
            return Vec::new();
        };

        let mut destinations = Vec::new();

        'patterns: for pattern in piece.jump_patterns() {
            let (&last, steps) = pattern.split_last().expect("patterns are never empty");

            let mut square = origin;
            for &(dr, dc) in steps {
                square = match square.shift(dr, dc) {
                    Some(next) => next,
                    None => continue 'patterns,
                };
                if self[square].is_some() {
                    continue 'patterns;
                }
            }

            let Some(dest) = square.shift(last.0, last.1) else {
                continue;
            };
            match self[dest] {
                Some(occupant) if occupant.camp() == piece.camp() => {}
                _ => destinations.push(dest),
            }
        }

        destinations
    }

    pub fn cho_formation(&self) -> Formation {
        self.cho_formation
    }

    pub fn han_formation(&self) -> Formation {
        self.han_formation
    }

    pub fn bottom_camp(&self) -> Camp {
        self.bottom_camp
    }
}

impl Index<Location> for Board {
    type Output = Option<Piece>;
    fn index(&self, index: Location) -> &Self::Output {
        &self.cells[index.index()]
    }
}

impl IndexMut<Location> for Board {
    fn index_mut(&mut self, index: Location) -> &mut Self::Output {
        &mut self.cells[index.index()]
    }
}
