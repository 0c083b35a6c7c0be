use crate::foodgrab::{GameState, InvalidMove, MoveRng};
use crate::provider::MoveProvider;
use std::cmp::Ordering;
use std::fmt::Debug;
use tracing::info;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    P0Win,
    P1Win,
    Draw,
}

/// Alternate turns until the combined score reaches `round_limit`: ask the
/// active player's provider for a move, apply it, hand the turn over.
/// `on_turn` runs before each move so a renderer can draw the board without
/// the core ever printing anything itself. An illegal move from a provider is
/// a logic bug and propagates instead of being papered over.
pub fn run<R, F>(
    state: &mut GameState<R>,
    providers: &mut [Box<dyn MoveProvider<R>>; 2],
    round_limit: u32,
    mut on_turn: F,
) -> Result<Outcome, InvalidMove>
where
    R: MoveRng + Debug,
    F: FnMut(&GameState<R>),
{
    while state.total_score() < round_limit {
        on_turn(state);
        let provider = &mut providers[state.current_player().as_index()];
        let pos = provider.get_move(state);
        state.apply_move(pos)?;
        state.advance_turn();
    }
    let [score0, score1] = state.scores();
    info!(player0 = score0, player1 = score1, "final score");
    Ok(match score0.cmp(&score1) {
        Ordering::Greater => Outcome::P0Win,
        Ordering::Less => Outcome::P1Win,
        Ordering::Equal => Outcome::Draw,
    })
}
