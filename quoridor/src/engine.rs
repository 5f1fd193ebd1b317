use super::{Action, GameState, Terminal};
use engine::engine::GameEngine;

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;
    type Terminal = Terminal;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State {
        let mut game_state = game_state.clone();
        game_state.take_action(action);
        game_state
    }

    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action> {
        game_state.all_valid_actions()
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_to_move()
    }

    fn move_number(&self, game_state: &Self::State) -> usize {
        game_state.move_number()
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Terminal> {
        game_state.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameOptions;

    #[test]
    fn test_take_action_leaves_original_untouched() {
        let engine = Engine::new();
        let game_state = GameState::new(GameOptions::new(5, 0));

        let next = engine.take_action(&game_state, &"down".parse().unwrap());

        assert_eq!(engine.player_to_move(&game_state), 1);
        assert_eq!(engine.player_to_move(&next), 2);
        assert_eq!(game_state.player_info(1).position().row, 0);
        assert_eq!(next.player_info(1).position().row, 1);
    }

    #[test]
    fn test_legal_actions_match_state() {
        let engine = Engine::new();
        let game_state = GameState::new(GameOptions::new(5, 1));

        assert_eq!(
            engine.legal_actions(&game_state),
            game_state.all_valid_actions()
        );
    }
}
