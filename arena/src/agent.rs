/// The contract an external move-choosing agent satisfies. Agents are
/// untrusted: they only ever receive defensive copies of the game state and
/// the legal-action list, and their selection runs inside the arbiter's
/// deadline. `reset` re-initializes internal memory between games so a
/// long-lived agent can be reused across a match without reconstruction.
pub trait Agent: Send {
    type State;
    type Action;

    /// Display name, used for reporting only.
    fn name(&self) -> &str;

    /// Chooses one of `legal_actions`. Anything else forfeits the game.
    fn select_action(
        &mut self,
        state: &Self::State,
        legal_actions: &[Self::Action],
    ) -> Self::Action;

    /// Clears any per-game memory.
    fn reset(&mut self);
}

impl<T: Agent + ?Sized> Agent for Box<T> {
    type State = T::State;
    type Action = T::Action;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn select_action(
        &mut self,
        state: &Self::State,
        legal_actions: &[Self::Action],
    ) -> Self::Action {
        (**self).select_action(state, legal_actions)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
