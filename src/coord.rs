//! 1-indexed board coordinates.

use core::fmt;

use crate::common::GameError;
use crate::config::BOARD_SIZE;

/// A validated cell on the board. `x` is the column, `y` the row, both in
/// `1..=BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Validate a 1-indexed pair.
    pub fn new(x: u8, y: u8) -> Result<Self, GameError> {
        if (1..=BOARD_SIZE).contains(&x) && (1..=BOARD_SIZE).contains(&y) {
            Ok(Coord { x, y })
        } else {
            Err(GameError::OutOfBounds { x, y })
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// Zero-based (row, col) used for storage.
    pub fn index(&self) -> (usize, usize) {
        ((self.y - 1) as usize, (self.x - 1) as usize)
    }

    /// Cell shifted by (`dx`, `dy`), or `None` if that leaves the board.
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Coord> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        let range = 1..=BOARD_SIZE as i16;
        if range.contains(&x) && range.contains(&y) {
            Some(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Every cell on the board, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (1..=BOARD_SIZE).flat_map(|y| (1..=BOARD_SIZE).map(move |x| Coord { x, y }))
    }
}

/// Row letter followed by column number, e.g. `B7` for (7, 2).
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.y - 1) as char, self.x)
    }
}
