use crate::foodgrab::{GameRng, GameState, MoveRng, Position};
use crate::provider::MoveProvider;
use std::fmt::Debug;

/// Picks a uniformly random legal move. Carries its own RNG so that drawing a
/// move never touches the game's randomness.
pub struct RandomBot<B: MoveRng = GameRng> {
    rng: B,
}

impl<B: MoveRng> RandomBot<B> {
    pub fn with_rng(rng: B) -> Self {
        RandomBot { rng }
    }
}

impl Default for RandomBot<GameRng> {
    fn default() -> Self {
        RandomBot::with_rng(GameRng::default())
    }
}

impl<R: MoveRng + Debug, B: MoveRng> MoveProvider<R> for RandomBot<B> {
    fn get_move(&mut self, state: &GameState<R>) -> Position {
        self.rng
            .choose(state.valid_moves().into_iter())
            // valid_moves is never empty: standing still is always legal
            .unwrap_or_else(|| state.player(state.current_player()).position())
    }
}

/// Picks the legal move closest to the food by squared Euclidean distance.
/// Ties go to the move enumerated first (increasing dx, then dy).
pub struct GreedyBot;

impl<R: MoveRng + Debug> MoveProvider<R> for GreedyBot {
    fn get_move(&mut self, state: &GameState<R>) -> Position {
        let food = state.food();
        state
            .valid_moves()
            .into_iter()
            .min_by_key(|m| m.distance_squared(food))
            .unwrap_or_else(|| state.player(state.current_player()).position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug)]
    struct MockRng;

    impl MoveRng for MockRng {
        fn choose<T, I: Iterator<Item = T> + Sized>(&mut self, mut iter: I) -> Option<T> {
            iter.next()
        }
    }

    #[test]
    fn test_greedy_moves_diagonally_toward_food() {
        let state = GameState::with_positions(10, [(0, 0), (9, 9)], (5, 5), MockRng).unwrap();
        let chosen = GreedyBot.get_move(&state);
        assert_eq!(chosen, Position::new(state.board(), 1, 1).unwrap());
    }

    #[test]
    fn test_greedy_steps_onto_adjacent_food() {
        let state = GameState::with_positions(10, [(4, 4), (9, 9)], (5, 5), MockRng).unwrap();
        let chosen = GreedyBot.get_move(&state);
        assert_eq!(chosen, state.food());
    }

    #[test]
    fn test_greedy_tie_broken_by_enumeration_order() {
        // The straight path to the food is blocked by the other player, which
        // leaves (1,1) and (1,3) equally close. The enumeration order visits
        // (1,1) first.
        let state = GameState::with_positions(5, [(0, 2), (1, 2)], (2, 2), MockRng).unwrap();
        let chosen = GreedyBot.get_move(&state);
        assert_eq!(chosen, Position::new(state.board(), 1, 1).unwrap());
    }

    #[test]
    fn test_greedy_returns_legal_move() {
        let state = GameState::with_positions(5, [(0, 0), (1, 1)], (3, 3), MockRng).unwrap();
        let chosen = GreedyBot.get_move(&state);
        assert!(state.valid_moves().contains(&chosen));
    }

    #[test]
    fn test_random_bot_only_returns_legal_moves() {
        let state = GameState::with_positions(9, [(4, 4), (0, 0)], (2, 2), MockRng).unwrap();
        let legal: HashSet<Position> = state.valid_moves().into_iter().collect();
        let mut bot = RandomBot::default();
        for _ in 0..300 {
            let m = bot.get_move(&state);
            assert!(legal.contains(&m));
        }
    }

    #[test]
    fn test_random_bot_reaches_every_legal_move() {
        let state = GameState::with_positions(9, [(4, 4), (0, 0)], (2, 2), MockRng).unwrap();
        let legal: HashSet<Position> = state.valid_moves().into_iter().collect();
        let mut bot = RandomBot::default();
        let mut seen = HashSet::new();
        for _ in 0..300 {
            seen.insert(bot.get_move(&state));
        }
        assert_eq!(seen, legal);
    }
}
