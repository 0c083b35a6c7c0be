use crate::foodgrab::{CellContent, GameState, MoveRng, PlayerNum, Position};
use std::fmt::Debug;
use std::fmt::Write;

fn cell_glyph(content: CellContent) -> char {
    match content {
        CellContent::Player(PlayerNum::P0) => '0',
        CellContent::Player(PlayerNum::P1) => '1',
        CellContent::Food => 'f',
        CellContent::Empty => ' ',
    }
}

/// The board as bordered text with a column-index header.
pub fn board_string<R: MoveRng + Debug>(state: &GameState<R>) -> String {
    let size = state.board().size();
    let mut out = String::new();
    out.push('\n');
    let header = (0..size)
        .map(|i| i.to_string())
        .collect::<Vec<String>>()
        .join(" ");
    let _ = writeln!(out, "   {header}");
    let border = format!("  +{}+", "-".repeat(size * 2 - 1));
    let _ = writeln!(out, "{border}");
    for y in 0..size {
        let _ = write!(out, "{y}|");
        for x in 0..size {
            let pos = Position::new(state.board(), x, y)
                .expect("iterating within board bounds");
            let _ = write!(out, " {}", cell_glyph(state.describe_cell(pos)));
        }
        out.push('|');
        out.push('\n');
    }
    let _ = writeln!(out, "{border}");
    out
}

pub fn turn_screen<R: MoveRng + Debug>(state: &GameState<R>) -> String {
    let [score0, score1] = state.scores();
    format!(
        "------ Food Grab ------\n\
         Score: [{score0}, {score1}]\n\
         Current Turn: Player {}\n\
         {}",
        state.current_player(),
        board_string(state),
    )
}

pub fn game_over_screen<R: MoveRng + Debug>(
    state: &GameState<R>,
    outcome: &crate::game_loop::Outcome,
) -> String {
    use crate::game_loop::Outcome;
    let [score0, score1] = state.scores();
    let result = match outcome {
        Outcome::P0Win => "Winner: Player 0".to_string(),
        Outcome::P1Win => "Winner: Player 1".to_string(),
        Outcome::Draw => "Result: Draw".to_string(),
    };
    format!(
        "------ Food Grab ------\n\
         Final Score: [{score0}, {score1}]\n\
         {result}\n\
         ------ Game Over ------\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_loop::Outcome;

    #[derive(Debug)]
    struct MockRng;

    impl MoveRng for MockRng {
        fn choose<T, I: Iterator<Item = T> + Sized>(&mut self, mut iter: I) -> Option<T> {
            iter.next()
        }
    }

    #[test]
    fn test_board_string() {
        let state = GameState::with_positions(3, [(0, 0), (2, 2)], (1, 1), MockRng).unwrap();
        let expected = "\n   0 1 2\n  +-----+\n0| 0    |\n1|   f  |\n2|     1|\n  +-----+\n";
        assert_eq!(board_string(&state), expected);
    }

    #[test]
    fn test_turn_screen() {
        let state = GameState::with_positions(3, [(0, 0), (2, 2)], (1, 1), MockRng).unwrap();
        let screen = turn_screen(&state);
        assert!(screen.starts_with("------ Food Grab ------\n"));
        assert!(screen.contains("Score: [0, 0]"));
        assert!(screen.contains("Current Turn: Player 0"));
        assert!(screen.contains("| 0    |"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut state =
            GameState::with_positions(3, [(0, 0), (2, 2)], (1, 1), MockRng).unwrap();
        let food = state.food();
        state.apply_move(food).unwrap();
        let screen = game_over_screen(&state, &Outcome::P0Win);
        assert!(screen.contains("Final Score: [1, 0]"));
        assert!(screen.contains("Winner: Player 0"));
        assert!(screen.ends_with("------ Game Over ------\n"));

        let draw = game_over_screen(&state, &Outcome::Draw);
        assert!(draw.contains("Result: Draw"));
    }
}
