use std::fmt::{self, Display, Formatter};

use crate::{Coordinate, GameState};

impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board_size = self.graph().board_size();
        let player_1_pawn = self.player_info(1).position();
        let player_2_pawn = self.player_info(2).position();

        writeln!(f)?;

        write!(f, "   +")?;
        for _ in 0..board_size {
            write!(f, "---+")?;
        }
        writeln!(f)?;

        for row in 0..board_size {
            write!(f, "{:>2} |", row)?;
            for col in 0..board_size {
                let coord = Coordinate::new(row, col);
                let pawn = if player_1_pawn == coord {
                    "1"
                } else if player_2_pawn == coord {
                    "2"
                } else {
                    " "
                };
                let right = Coordinate::new(row, col + 1);
                let side = if col + 1 < board_size && !self.graph().is_edge(coord, right) {
                    "█"
                } else {
                    "|"
                };
                write!(f, " {} {}", pawn, side)?;
            }
            writeln!(f)?;

            write!(f, "   +")?;
            for col in 0..board_size {
                let coord = Coordinate::new(row, col);
                let below = Coordinate::new(row + 1, col);
                let blocked = row + 1 < board_size && !self.graph().is_edge(coord, below);
                write!(f, "{}+", if blocked { "■■■" } else { "---" })?;
            }
            writeln!(f)?;
        }

        write!(f, "    ")?;
        for col in 0..board_size {
            write!(f, " {}  ", col % 10)?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "  P1: {}  P2: {}",
            self.player_info(1).walls_remaining(),
            self.player_info(2).walls_remaining()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Action, GameOptions, GameState, Wall};

    #[test]
    fn test_display_marks_pawns_and_walls() {
        let mut game_state = GameState::new(GameOptions::new(5, 2));
        game_state.take_action(&Action::PlaceWall(Wall::horizontal(
            crate::Coordinate::new(2, 2),
        )));

        let rendered = game_state.to_string();

        assert!(rendered.contains('1'));
        assert!(rendered.contains('2'));
        assert!(rendered.contains("■■■"));
        assert!(rendered.contains("P1: 1  P2: 2"));
    }

    #[test]
    fn test_display_open_board_has_no_wall_marks() {
        let game_state = GameState::new(GameOptions::new(5, 2));
        let rendered = game_state.to_string();

        assert!(!rendered.contains('█'));
        assert!(!rendered.contains('■'));
    }
}
