/// A terminal game outcome, scored from each player's point of view.
pub trait Value: Clone {
    fn value_for_player(&self, player: usize) -> f32;
}
