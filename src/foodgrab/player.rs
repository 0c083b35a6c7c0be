use crate::foodgrab::board::Position;
use serde::Serialize;
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Serialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerNum {
    P0,
    P1,
}

impl PlayerNum {
    pub fn other(&self) -> PlayerNum {
        match self {
            PlayerNum::P0 => PlayerNum::P1,
            PlayerNum::P1 => PlayerNum::P0,
        }
    }

    pub fn as_index(&self) -> usize {
        match self {
            PlayerNum::P0 => 0,
            PlayerNum::P1 => 1,
        }
    }
}

impl fmt::Display for PlayerNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_index())
    }
}

pub struct Players([Player; 2]);

impl Index<PlayerNum> for Players {
    type Output = Player;
    fn index(&self, index: PlayerNum) -> &Self::Output {
        &self.0[index.as_index()]
    }
}

impl IndexMut<PlayerNum> for Players {
    fn index_mut(&mut self, index: PlayerNum) -> &mut Self::Output {
        &mut self.0[index.as_index()]
    }
}

impl Players {
    pub fn new(players: [Player; 2]) -> Self {
        Players(players)
    }
}

impl fmt::Debug for Players {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

#[derive(Debug)]
pub struct Player {
    position: Position,
    score: u32,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Player { position, score: 0 }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub(crate) fn add_point(&mut self) {
        self.score += 1;
    }
}
