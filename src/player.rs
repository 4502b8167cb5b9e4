use alloc::string::String;

use crate::board::Board;
use crate::fleet::Fleet;

/// A participant: nickname plus exclusively owned shot grid and fleet.
#[derive(Debug, Clone)]
pub struct Player {
    nickname: String,
    board: Board,
    fleet: Fleet,
}

impl Player {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            board: Board::new(),
            fleet: Fleet::new(),
        }
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Shots this player has fired at the opponent.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub(crate) fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
