use crate::config::PlayerConfig;
use crate::foodgrab::{GameRng, GameState, MoveRng, PlayerNum, Position};
use std::fmt::Debug;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

mod bots;
mod remote;

pub use bots::{GreedyBot, RandomBot};
pub use remote::{ProviderError, RemoteModelProvider};

pub const RANDOM_BOT: &str = "random_bot";
pub const GREEDY_BOT: &str = "greedy_bot";

pub trait MoveProvider<R: MoveRng + Debug> {
    /// Pick a move for the state's current player. The returned position must
    /// be one of `state.valid_moves()`; the state itself is never touched.
    fn get_move(&mut self, state: &GameState<R>) -> Position;
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("player {player} selects remote model {model:?} but sets no base_url")]
    MissingBaseUrl { player: PlayerNum, model: String },
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Build the move provider a player's config section asks for. Any model name
/// that is not one of the scripted bots is treated as a remote model
/// identifier and needs a base_url to go with it.
pub fn build(
    cfg: &PlayerConfig,
    player: PlayerNum,
) -> Result<Box<dyn MoveProvider<GameRng>>, BuildError> {
    let provider: Box<dyn MoveProvider<GameRng>> = match cfg.model.as_str() {
        RANDOM_BOT => Box::new(RandomBot::default()),
        GREEDY_BOT => Box::new(GreedyBot),
        model => {
            let base_url =
                cfg.base_url
                    .clone()
                    .ok_or_else(|| BuildError::MissingBaseUrl {
                        player,
                        model: model.to_string(),
                    })?;
            Box::new(RemoteModelProvider::new(
                model.to_string(),
                base_url,
                cfg.api_key.clone(),
                Duration::from_secs(cfg.request_timeout_secs),
            )?)
        }
    };
    info!(player = %player, model = %cfg.model, "configured move provider");
    Ok(provider)
}
