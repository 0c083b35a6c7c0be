use crate::foodgrab::board::{Board, BoardError, Position, PositionError};
use crate::foodgrab::player::{Player, PlayerNum, Players};
use rand::prelude::IteratorRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::Debug;
use thiserror::Error;
use tracing::info;

pub trait MoveRng {
    fn choose<T, I: Iterator<Item = T> + Sized>(&mut self, iter: I) -> Option<T>;
}

#[derive(Debug)]
pub struct GameRng {
    rng: StdRng,
}

impl Default for GameRng {
    fn default() -> Self {
        let rng = StdRng::from_rng(rand::thread_rng()).unwrap();
        GameRng { rng }
    }
}

impl MoveRng for GameRng {
    fn choose<T, I: Iterator<Item = T> + Sized>(&mut self, iter: I) -> Option<T> {
        iter.choose(&mut self.rng)
    }
}

#[derive(Error, Debug)]
pub enum GameStateError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Position(#[from] PositionError),
    #[error("board of size {size} has no interior to spawn food in")]
    NoInterior { size: usize },
    #[error("both players placed on {0}")]
    PlayersOverlap(Position),
    #[error("food placed on a player at {0}")]
    FoodOnPlayer(Position),
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("player {player} moved to {attempted}, which is not a legal move")]
pub struct InvalidMove {
    pub player: PlayerNum,
    pub attempted: Position,
}

/// What a single cell holds, for rendering. A player standing on food shadows
/// it; that only happens transiently within a turn, before the food respawns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellContent {
    Player(PlayerNum),
    Food,
    Empty,
}

#[derive(Debug)]
pub struct GameState<R: Debug> {
    board: Board,
    players: Players,
    food: Position,
    current_player: PlayerNum,
    rng: R,
}

impl<R: MoveRng + Debug> GameState<R> {
    /// Start a game with players at opposite corners and food spawned
    /// uniformly in the board interior. Needs a board of at least 3x3 so the
    /// interior is non-empty.
    pub fn new(board_size: usize, mut rng: R) -> Result<Self, GameStateError> {
        let board = Board::new(board_size)?;
        let p0 = Position::new(&board, 0, 0)?;
        let p1 = Position::new(&board, board_size - 1, board_size - 1)?;
        // The interior never touches the corners, so food cannot land on a player here.
        let food = rng
            .choose(board.interior_positions())
            .ok_or(GameStateError::NoInterior { size: board_size })?;
        Ok(GameState {
            board,
            players: Players::new([Player::new(p0), Player::new(p1)]),
            food,
            current_player: PlayerNum::P0,
            rng,
        })
    }

    /// Start a game with explicit placements, validating every invariant:
    /// all positions in bounds, players distinct, food on neither player.
    pub fn with_positions(
        board_size: usize,
        player_positions: [(usize, usize); 2],
        food: (usize, usize),
        rng: R,
    ) -> Result<Self, GameStateError> {
        let board = Board::new(board_size)?;
        let p0 = Position::new(&board, player_positions[0].0, player_positions[0].1)?;
        let p1 = Position::new(&board, player_positions[1].0, player_positions[1].1)?;
        let food = Position::new(&board, food.0, food.1)?;
        if p0 == p1 {
            return Err(GameStateError::PlayersOverlap(p0));
        }
        if food == p0 || food == p1 {
            return Err(GameStateError::FoodOnPlayer(food));
        }
        Ok(GameState {
            board,
            players: Players::new([Player::new(p0), Player::new(p1)]),
            food,
            current_player: PlayerNum::P0,
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, num: PlayerNum) -> &Player {
        &self.players[num]
    }

    pub fn current_player(&self) -> PlayerNum {
        self.current_player
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn scores(&self) -> [u32; 2] {
        [
            self.players[PlayerNum::P0].score(),
            self.players[PlayerNum::P1].score(),
        ]
    }

    pub fn total_score(&self) -> u32 {
        self.scores().iter().sum()
    }

    /// Every cell within Chebyshev distance 1 of the current player (standing
    /// still included) that is in bounds and not occupied by the other player.
    /// Never empty on any legal board. Enumeration order is increasing dx,
    /// then increasing dy; GreedyBot's tie-break relies on it being stable.
    pub fn valid_moves(&self) -> Vec<Position> {
        let player = self.players[self.current_player].position();
        let other = self.players[self.current_player.other()].position();
        let mut moves = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(pos) = self.board.offset(player, dx, dy) {
                    if pos != other {
                        moves.push(pos);
                    }
                }
            }
        }
        moves
    }

    /// Move the current player to `pos`. Scores a point and respawns the food
    /// if the move lands on it. Rejects anything outside `valid_moves`, since
    /// an illegal move can only come from a buggy provider.
    pub fn apply_move(&mut self, pos: Position) -> Result<(), InvalidMove> {
        if !self.valid_moves().contains(&pos) {
            return Err(InvalidMove {
                player: self.current_player,
                attempted: pos,
            });
        }
        self.players[self.current_player].set_position(pos);
        if pos == self.food {
            self.players[self.current_player].add_point();
            info!(
                player = %self.current_player,
                score = self.players[self.current_player].score(),
                "food collected"
            );
            self.spawn_food();
        }
        Ok(())
    }

    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.other();
    }

    pub fn describe_cell(&self, pos: Position) -> CellContent {
        if self.players[PlayerNum::P0].position() == pos {
            return CellContent::Player(PlayerNum::P0);
        }
        if self.players[PlayerNum::P1].position() == pos {
            return CellContent::Player(PlayerNum::P1);
        }
        if self.food == pos {
            return CellContent::Food;
        }
        CellContent::Empty
    }

    fn spawn_food(&mut self) {
        let p0 = self.players[PlayerNum::P0].position();
        let p1 = self.players[PlayerNum::P1].position();
        let candidates = self.board.positions().filter(|c| *c != p0 && *c != p1);
        // Two players can never fill a board of 2x2 or larger.
        if let Some(cell) = self.rng.choose(candidates) {
            self.food = cell;
        }
    }
}
