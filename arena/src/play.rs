use std::fmt::Display;
use std::time::Duration;

use engine::{GameEngine, Value};
use log::info;
use serde::Serialize;

use crate::{Agent, Arbiter, ForfeitReason, MatchOptions, Selection};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum GameOutcome {
    Won {
        player: usize,
        forfeit: Option<ForfeitReason>,
    },
    DrawByMoveCap,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<usize> {
        match self {
            GameOutcome::Won { player, .. } => Some(*player),
            GameOutcome::DrawByMoveCap => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameResult<A> {
    pub actions: Vec<A>,
    pub outcome: GameOutcome,
}

#[derive(Clone, Debug, Serialize)]
pub struct MatchResult {
    pub agent_scores: Vec<(String, f32)>,
    pub num_of_games_played: usize,
    pub draws: usize,
}

/// Plays one game to its end. Each turn: check for a terminal state,
/// snapshot the legal actions, hand copies to the arbiter, apply the chosen
/// action. Any forfeit ends the game at once with the other player the
/// winner and the last accepted action as the final board state. Returns the
/// agents alongside the result; a seat is `None` when its worker was
/// abandoned.
pub async fn play_game<E, G>(
    engine: &E,
    initial_state: E::State,
    agents: [G; 2],
    arbiter: &Arbiter,
    visualise: bool,
) -> (GameResult<E::Action>, [Option<G>; 2])
where
    E: GameEngine,
    E::State: Clone + Display + Send + 'static,
    E::Action: Clone + PartialEq + Send + 'static,
    G: Agent<State = E::State, Action = E::Action> + 'static,
{
    let mut agents = agents.map(Some);
    let mut state = initial_state;
    let mut actions_taken: Vec<E::Action> = Vec::new();

    let outcome = loop {
        if let Some(terminal) = engine.terminal_state(&state) {
            break outcome_from_terminal(&terminal);
        }

        let player = engine.player_to_move(&state);
        let legal_actions = engine.legal_actions(&state);

        let agent = match agents[player - 1].take() {
            Some(agent) => agent,
            None => panic!("player {} has no agent but the game is still live", player),
        };
        let agent_name = agent.name().to_string();

        let (returned, selection) = arbiter
            .select_action(agent, state.clone(), legal_actions)
            .await;
        agents[player - 1] = returned;

        match selection {
            Selection::Forfeit(reason) => {
                let opponent = 3 - player;
                info!(
                    "Player {} ({}) {}. Player {} wins.",
                    player, agent_name, reason, opponent
                );
                break GameOutcome::Won {
                    player: opponent,
                    forfeit: Some(reason),
                };
            }
            Selection::Chosen(action) => {
                state = engine.take_action(&state, &action);
                actions_taken.push(action);

                if visualise {
                    println!("{}", state);
                }
            }
        }
    };

    (
        GameResult {
            actions: actions_taken,
            outcome,
        },
        agents,
    )
}

/// Plays a series of games between two agents, alternating seats each game.
/// Agents are reset between games and rebuilt from their factory when a
/// previous game abandoned their worker.
pub async fn play_match<E, G>(
    engine: &E,
    new_state: &dyn Fn() -> E::State,
    factories: [&dyn Fn() -> G; 2],
    options: &MatchOptions,
) -> MatchResult
where
    E: GameEngine,
    E::State: Clone + Display + Send + 'static,
    E::Action: Clone + PartialEq + Send + 'static,
    G: Agent<State = E::State, Action = E::Action> + 'static,
{
    let arbiter = Arbiter::new(Duration::from_millis(options.move_timeout_ms));

    let first = factories[0]();
    let second = factories[1]();
    let names = [first.name().to_string(), second.name().to_string()];
    let mut agents = [Some(first), Some(second)];

    let mut scores = [0.0f32; 2];
    let mut draws = 0;
    let mut num_of_games_played = 0;

    for game_number in 0..options.num_games {
        let swap_seats = game_number % 2 == 1;

        for (agent, factory) in agents.iter_mut().zip(factories) {
            match agent {
                Some(agent) => agent.reset(),
                None => *agent = Some(factory()),
            }
        }

        let [slot_one, slot_two] = agents;
        let (first, second) = match (slot_one, slot_two) {
            (Some(first), Some(second)) => (first, second),
            _ => panic!("agents must exist before a game starts"),
        };
        let seated = if swap_seats {
            [second, first]
        } else {
            [first, second]
        };

        let (result, returned) = play_game(
            engine,
            new_state(),
            seated,
            &arbiter,
            options.visualise,
        )
        .await;

        let [seat_one, seat_two] = returned;
        agents = if swap_seats {
            [seat_two, seat_one]
        } else {
            [seat_one, seat_two]
        };

        num_of_games_played += 1;

        match result.outcome {
            GameOutcome::Won { player, .. } => {
                let slot = if swap_seats { 2 - player } else { player - 1 };
                scores[slot] += 1.0;
            }
            GameOutcome::DrawByMoveCap => draws += 1,
        }

        info!(
            "Game {}: {:?} after {} actions. Scores: {} {} - {} {}",
            game_number + 1,
            result.outcome,
            result.actions.len(),
            names[0],
            scores[0],
            names[1],
            scores[1]
        );
    }

    MatchResult {
        agent_scores: names.into_iter().zip(scores).collect(),
        num_of_games_played,
        draws,
    }
}

fn outcome_from_terminal<T: Value>(terminal: &T) -> GameOutcome {
    let player_1 = terminal.value_for_player(1);
    let player_2 = terminal.value_for_player(2);

    if player_1 > player_2 {
        GameOutcome::Won {
            player: 1,
            forfeit: None,
        }
    } else if player_2 > player_1 {
        GameOutcome::Won {
            player: 2,
            forfeit: None,
        }
    } else {
        GameOutcome::DrawByMoveCap
    }
}
