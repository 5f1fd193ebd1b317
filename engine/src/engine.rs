use super::value::Value;

/// The rules of a game: action application, action generation and outcome
/// detection. The engine itself is stateless; all game state lives in
/// `Self::State` values.
pub trait GameEngine {
    type Action;
    type State;
    type Terminal: Value;

    fn take_action(&self, game_state: &Self::State, action: &Self::Action) -> Self::State;
    fn legal_actions(&self, game_state: &Self::State) -> Vec<Self::Action>;
    fn player_to_move(&self, game_state: &Self::State) -> usize;
    fn move_number(&self, game_state: &Self::State) -> usize;
    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Terminal>;
}
