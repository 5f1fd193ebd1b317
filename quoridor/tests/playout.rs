use rand::prelude::{SeedableRng, SliceRandom, StdRng};

use quoridor::{path_to_row_exists, ActionSpace, GameOptions, GameState};

fn assert_connectivity(game_state: &GameState) {
    for player in [1, 2] {
        let info = game_state.player_info(player);
        assert!(
            path_to_row_exists(game_state.graph(), info.position(), info.goal_row()),
            "player {} lost every path to row {} after move {}",
            player,
            info.goal_row(),
            game_state.move_number()
        );
    }
}

/// Plays random legal games to completion and checks, after every single
/// action, that both players can still reach their goal row.
#[test]
fn test_random_playouts_preserve_goal_connectivity() {
    for seed in 0..5u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let options = GameOptions {
            board_size: 7,
            walls_per_player: 4,
            max_moves: 60,
        };
        let action_space = ActionSpace::new(options.board_size);
        let mut game_state = GameState::new(options);

        assert_connectivity(&game_state);

        while game_state.is_terminal().is_none() {
            let actions = game_state.all_valid_actions();
            assert!(!actions.is_empty(), "no legal actions in a live state");

            for action in &actions {
                let index = action_space.index_of(action);
                assert!(index < action_space.size());
                assert_eq!(action_space.action_at(index), Some(*action));
            }

            let action = actions.choose(&mut rng).copied();
            let action = match action {
                Some(action) => action,
                None => unreachable!(),
            };

            game_state.take_action(&action);
            assert_connectivity(&game_state);
        }
    }
}

/// Action names survive a round trip through their string encoding, so a
/// move chosen out of process can be matched back to the in-process set.
#[test]
fn test_legal_action_names_round_trip() {
    let game_state = GameState::new(GameOptions::new(5, 2));

    for action in game_state.all_valid_actions() {
        let name = action.to_string();
        assert_eq!(name.parse::<quoridor::Action>().unwrap(), action);
    }
}
