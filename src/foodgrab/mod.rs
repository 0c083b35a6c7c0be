mod board;
mod game_state;
mod player;

pub use board::{Board, BoardError, Position, PositionError};
pub use game_state::{CellContent, GameRng, GameState, GameStateError, InvalidMove, MoveRng};
pub use player::{Player, PlayerNum, Players};
