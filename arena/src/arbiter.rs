use std::fmt;
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::time::timeout;

use crate::Agent;

/// Why a player lost a game without being beaten on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ForfeitReason {
    Timeout,
    Crash,
    IllegalAction,
}

impl fmt::Display for ForfeitReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match self {
            ForfeitReason::Timeout => "timed out",
            ForfeitReason::Crash => "crashed",
            ForfeitReason::IllegalAction => "chose an illegal action",
        };
        write!(f, "{}", reason)
    }
}

#[derive(Debug)]
pub enum Selection<A> {
    Chosen(A),
    Forfeit(ForfeitReason),
}

/// Runs an agent's move selection on an isolated worker under a wall-clock
/// deadline. The worker owns the agent plus copies of the state and the
/// legal-action list, so an abandoned worker can never touch live game
/// state; whatever it eventually produces is discarded.
pub struct Arbiter {
    move_timeout: Duration,
}

impl Arbiter {
    pub fn new(move_timeout: Duration) -> Self {
        Self { move_timeout }
    }

    pub fn move_timeout(&self) -> Duration {
        self.move_timeout
    }

    /// Returns the agent (when its worker finished) and the classified
    /// outcome. A timeout abandons the worker and loses the agent with it; a
    /// worker that dies without reporting counts as a crash; a returned
    /// action is validated against the offered list.
    pub async fn select_action<G>(
        &self,
        agent: G,
        state: G::State,
        legal_actions: Vec<G::Action>,
    ) -> (Option<G>, Selection<G::Action>)
    where
        G: Agent + 'static,
        G::State: Send + 'static,
        G::Action: PartialEq + Send + 'static,
    {
        let (result_tx, result_rx) = oneshot::channel();

        std::thread::spawn(move || {
            let mut agent = agent;
            let action = agent.select_action(&state, &legal_actions);
            // The receiver is gone if the deadline already expired.
            let _ = result_tx.send((agent, action, legal_actions));
        });

        match timeout(self.move_timeout, result_rx).await {
            Err(_elapsed) => (None, Selection::Forfeit(ForfeitReason::Timeout)),
            Ok(Err(_recv_error)) => {
                // The worker dropped the sender without reporting: the
                // agent's code panicked mid-selection.
                warn!("agent worker died before returning an action");
                (None, Selection::Forfeit(ForfeitReason::Crash))
            }
            Ok(Ok((agent, action, legal_actions))) => {
                if legal_actions.contains(&action) {
                    (Some(agent), Selection::Chosen(action))
                } else {
                    (Some(agent), Selection::Forfeit(ForfeitReason::IllegalAction))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedAgent {
        action: u32,
    }

    impl Agent for ScriptedAgent {
        type State = ();
        type Action = u32;

        fn name(&self) -> &str {
            "scripted"
        }

        fn select_action(&mut self, _state: &(), _legal_actions: &[u32]) -> u32 {
            self.action
        }

        fn reset(&mut self) {}
    }

    struct SleepyAgent;

    impl Agent for SleepyAgent {
        type State = ();
        type Action = u32;

        fn name(&self) -> &str {
            "sleepy"
        }

        fn select_action(&mut self, _state: &(), _legal_actions: &[u32]) -> u32 {
            std::thread::sleep(Duration::from_secs(5));
            0
        }

        fn reset(&mut self) {}
    }

    struct PanickyAgent;

    impl Agent for PanickyAgent {
        type State = ();
        type Action = u32;

        fn name(&self) -> &str {
            "panicky"
        }

        fn select_action(&mut self, _state: &(), _legal_actions: &[u32]) -> u32 {
            panic!("agent blew up");
        }

        fn reset(&mut self) {}
    }

    #[tokio::test]
    async fn test_valid_choice_is_returned_with_the_agent() {
        let arbiter = Arbiter::new(Duration::from_secs(1));
        let (agent, selection) = arbiter
            .select_action(ScriptedAgent { action: 2 }, (), vec![1, 2, 3])
            .await;

        assert!(agent.is_some());
        assert!(matches!(selection, Selection::Chosen(2)));
    }

    #[tokio::test]
    async fn test_off_list_choice_is_an_illegal_forfeit() {
        let arbiter = Arbiter::new(Duration::from_secs(1));
        let (agent, selection) = arbiter
            .select_action(ScriptedAgent { action: 9 }, (), vec![1, 2, 3])
            .await;

        assert!(agent.is_some());
        assert!(matches!(
            selection,
            Selection::Forfeit(ForfeitReason::IllegalAction)
        ));
    }

    #[tokio::test]
    async fn test_deadline_expiry_is_a_timeout_forfeit() {
        let arbiter = Arbiter::new(Duration::from_millis(50));
        let (agent, selection) = arbiter.select_action(SleepyAgent, (), vec![1]).await;

        assert!(agent.is_none());
        assert!(matches!(
            selection,
            Selection::Forfeit(ForfeitReason::Timeout)
        ));
    }

    #[tokio::test]
    async fn test_panic_is_a_crash_forfeit() {
        let arbiter = Arbiter::new(Duration::from_secs(1));
        let (agent, selection) = arbiter.select_action(PanickyAgent, (), vec![1]).await;

        assert!(agent.is_none());
        assert!(matches!(
            selection,
            Selection::Forfeit(ForfeitReason::Crash)
        ));
    }
}
