use serde::{Deserialize, Serialize};

/// How a finished game ended. A game that hits the move cap is worth nothing
/// to either player, matching the scoring of a loss for both.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Terminal {
    Won { player: usize },
    DrawByMoveCap,
}

impl engine::Value for Terminal {
    fn value_for_player(&self, player: usize) -> f32 {
        match self {
            Terminal::Won { player: winner } if *winner == player => 1.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use engine::Value;

    #[test]
    fn test_win_values() {
        let terminal = Terminal::Won { player: 1 };

        assert_approx_eq!(terminal.value_for_player(1), 1.0);
        assert_approx_eq!(terminal.value_for_player(2), 0.0);
    }

    #[test]
    fn test_draw_values() {
        let terminal = Terminal::DrawByMoveCap;

        assert_approx_eq!(terminal.value_for_player(1), 0.0);
        assert_approx_eq!(terminal.value_for_player(2), 0.0);
    }
}
