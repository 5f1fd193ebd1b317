use crate::{Action, Coordinate, MoveDirection, SpecialMove, Wall, WallOrientation};

pub const MOVE_ACTION_COUNT: usize = 4;
pub const SPECIAL_ACTION_COUNT: usize = 8;

/// The fixed index layout over every action the game can express, computed
/// once from the board size: four pawn moves, eight special moves, a block of
/// vertical-wall slots, then a block of horizontal-wall slots. Wall slots are
/// keyed by anchor in row-major order. The layout is reproducible from N
/// alone, so indices and names are stable across processes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ActionSpace {
    board_size: u8,
    vertical_wall_start: usize,
    horizontal_wall_start: usize,
    size: usize,
}

impl ActionSpace {
    pub fn new(board_size: u8) -> Self {
        let n = board_size as usize;
        let wall_block = (n - 1) * (n + 1);
        let vertical_wall_start = MOVE_ACTION_COUNT + SPECIAL_ACTION_COUNT;
        let horizontal_wall_start = vertical_wall_start + wall_block;

        Self {
            board_size,
            vertical_wall_start,
            horizontal_wall_start,
            size: horizontal_wall_start + wall_block,
        }
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    /// Total number of slots, 4 + 8 + 2·(N−1)·(N+1).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn index_of(&self, action: &Action) -> usize {
        match action {
            Action::Move(direction) => direction.ordinal(),
            Action::SpecialMove(special) => MOVE_ACTION_COUNT + special.ordinal(),
            Action::PlaceWall(wall) => {
                let start = match wall.orientation() {
                    WallOrientation::Vertical => self.vertical_wall_start,
                    WallOrientation::Horizontal => self.horizontal_wall_start,
                };
                let anchor = wall.anchor();
                start + anchor.row as usize * (self.board_size as usize - 1) + anchor.col as usize
            }
        }
    }

    /// The action occupying `index`, or `None` for out-of-range indices and
    /// the padding slots at the tail of each wall block.
    pub fn action_at(&self, index: usize) -> Option<Action> {
        if index < MOVE_ACTION_COUNT {
            return Some(Action::Move(MoveDirection::ALL[index]));
        }

        if index < self.vertical_wall_start {
            return Some(Action::SpecialMove(
                SpecialMove::ALL[index - MOVE_ACTION_COUNT],
            ));
        }

        if index >= self.size {
            return None;
        }

        let (start, vertical) = if index < self.horizontal_wall_start {
            (self.vertical_wall_start, true)
        } else {
            (self.horizontal_wall_start, false)
        };

        let anchors_per_row = self.board_size as usize - 1;
        let offset = index - start;
        let row = offset / anchors_per_row;
        let col = offset % anchors_per_row;

        if row >= anchors_per_row {
            return None;
        }

        let anchor = Coordinate::new(row as u8, col as u8);
        Some(Action::PlaceWall(if vertical {
            Wall::vertical(anchor)
        } else {
            Wall::horizontal(anchor)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_formula() {
        assert_eq!(ActionSpace::new(5).size(), 4 + 8 + 2 * 4 * 6);
        assert_eq!(ActionSpace::new(9).size(), 4 + 8 + 2 * 8 * 10);
    }

    #[test]
    fn test_layout_is_deterministic() {
        assert_eq!(ActionSpace::new(9), ActionSpace::new(9));

        let first = ActionSpace::new(7);
        let second = ActionSpace::new(7);
        for index in 0..first.size() {
            assert_eq!(first.action_at(index), second.action_at(index));
        }
    }

    #[test]
    fn test_movement_block_layout() {
        let space = ActionSpace::new(5);

        assert_eq!(space.action_at(0), Some(Action::Move(MoveDirection::Up)));
        assert_eq!(space.action_at(3), Some(Action::Move(MoveDirection::Down)));
        assert_eq!(
            space.action_at(4),
            Some(Action::SpecialMove(SpecialMove::JumpUp))
        );
        assert_eq!(
            space.action_at(11),
            Some(Action::SpecialMove(SpecialMove::DownRight))
        );
    }

    #[test]
    fn test_wall_blocks_follow_special_moves() {
        let space = ActionSpace::new(5);
        let vertical_origin = Action::PlaceWall(Wall::vertical(Coordinate::new(0, 0)));
        let horizontal_origin = Action::PlaceWall(Wall::horizontal(Coordinate::new(0, 0)));

        assert_eq!(space.index_of(&vertical_origin), 12);
        assert_eq!(space.index_of(&horizontal_origin), 12 + 4 * 6);
    }

    #[test]
    fn test_index_round_trip_over_populated_slots() {
        let space = ActionSpace::new(5);
        let mut populated = 0;

        for index in 0..space.size() {
            if let Some(action) = space.action_at(index) {
                assert_eq!(space.index_of(&action), index);
                populated += 1;
            }
        }

        // 12 movement slots plus (N−1)² anchors per wall orientation.
        assert_eq!(populated, 12 + 2 * 4 * 4);
    }

    #[test]
    fn test_padding_slots_are_empty() {
        let space = ActionSpace::new(5);

        // The vertical block holds 4*6 slots but only 4*4 anchors exist.
        let first_padding = 12 + 4 * 4;
        assert_eq!(space.action_at(first_padding), None);
        assert_eq!(space.action_at(space.size()), None);
        assert_eq!(space.action_at(space.size() + 100), None);
    }
}
