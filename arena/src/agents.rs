//! Reference agents. Real policies live outside the engine; these two exist
//! so matches can run out of the box and the harness has known-good
//! opponents to test against.

use rand::prelude::{SeedableRng, SliceRandom, StdRng};

use quoridor::{shortest_path_to_row, Action, GameState};

use crate::Agent;

/// Picks a uniformly random legal action.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    type State = GameState;
    type Action = Action;

    fn name(&self) -> &str {
        "random"
    }

    fn select_action(&mut self, _state: &GameState, legal_actions: &[Action]) -> Action {
        match legal_actions.choose(&mut self.rng) {
            Some(action) => *action,
            None => panic!("no legal actions were offered"),
        }
    }

    fn reset(&mut self) {}
}

/// Walks a shortest path toward its goal row, jumping or side-stepping when
/// the opponent blocks the next step. Places no walls.
pub struct PathWalker;

impl Agent for PathWalker {
    type State = GameState;
    type Action = Action;

    fn name(&self) -> &str {
        "walker"
    }

    fn select_action(&mut self, state: &GameState, legal_actions: &[Action]) -> Action {
        let me = state.player_to_move();
        let info = state.player_info(me);

        let path = match shortest_path_to_row(state.graph(), info.position(), info.goal_row()) {
            Some(path) => path,
            // Unreachable goals are impossible in a live state; a missing
            // path means the engine's invariant is broken.
            None => panic!("player {} has no path to row {}", me, info.goal_row()),
        };

        if let Some(next) = path.get(1) {
            let step = (
                next.row as i8 - info.position().row as i8,
                next.col as i8 - info.position().col as i8,
            );

            for action in legal_actions {
                if let Action::Move(direction) = action {
                    if direction.delta() == step {
                        return *action;
                    }
                }
            }
        }

        // The next step is occupied by the opponent: take the first jump or
        // diagonal on offer, falling back to any legal action.
        legal_actions
            .iter()
            .find(|action| matches!(action, Action::SpecialMove(_)))
            .or_else(|| legal_actions.first())
            .copied()
            .unwrap_or_else(|| panic!("no legal actions were offered"))
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use quoridor::GameOptions;

    #[test]
    fn test_random_agent_picks_a_legal_action() {
        let state = GameState::new(GameOptions::new(5, 1));
        let legal_actions = state.all_valid_actions();
        let mut agent = RandomAgent::from_seed(42);

        for _ in 0..20 {
            let action = agent.select_action(&state, &legal_actions);
            assert!(legal_actions.contains(&action));
        }
    }

    #[test]
    fn test_path_walker_advances_toward_goal() {
        let state = GameState::new(GameOptions::new(5, 0));
        let legal_actions = state.all_valid_actions();
        let mut agent = PathWalker;

        let action = agent.select_action(&state, &legal_actions);

        // Player 1 starts at (0,2) with goal row 4: straight down.
        assert_eq!(action, "down".parse().unwrap());
    }

    #[test]
    fn test_path_walker_uses_special_moves_when_blocked() {
        let mut state = GameState::new(GameOptions::new(5, 0));
        for action in ["down", "up", "down"] {
            state.take_action(&action.parse().unwrap());
        }

        // Player 2 at (3,2) faces player 1 at (2,2); its shortest path runs
        // through the occupied cell, so it should take the straight jump.
        let legal_actions = state.all_valid_actions();
        let mut agent = PathWalker;
        let action = agent.select_action(&state, &legal_actions);

        assert_eq!(action, "jump_up".parse().unwrap());
    }
}
