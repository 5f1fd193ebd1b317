use crate::Coordinate;

const OPEN_UP: u8 = 1 << 0;
const OPEN_RIGHT: u8 = 1 << 1;
const OPEN_DOWN: u8 = 1 << 2;
const OPEN_LEFT: u8 = 1 << 3;

const DIRECTIONS: [(u8, (i8, i8)); 4] = [
    (OPEN_UP, (-1, 0)),
    (OPEN_RIGHT, (0, 1)),
    (OPEN_DOWN, (1, 0)),
    (OPEN_LEFT, (0, -1)),
];

/// Connectivity between board cells. Each cell carries a bitmask of the
/// orthogonal directions that are still open; walls clear bits, and a bit is
/// never set again for the lifetime of a game.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BoardGraph {
    board_size: u8,
    cells: Vec<u8>,
}

impl BoardGraph {
    pub fn new(board_size: u8) -> Self {
        let size = board_size as usize;
        let mut cells = vec![0u8; size * size];

        for index in 0..cells.len() {
            let cell = Coordinate::from_index(index, board_size);
            let mut mask = 0;
            for (bit, delta) in DIRECTIONS {
                if cell.offset(delta, board_size).is_some() {
                    mask |= bit;
                }
            }
            cells[index] = mask;
        }

        Self { board_size, cells }
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    /// True iff `a` and `b` are adjacent cells with no wall between them.
    pub fn is_edge(&self, a: Coordinate, b: Coordinate) -> bool {
        if !self.in_bounds(a) || !self.in_bounds(b) {
            return false;
        }

        match direction_bits(a, b) {
            Some((bit, _)) => self.cells[a.index(self.board_size)] & bit != 0,
            None => false,
        }
    }

    /// Removes the edge between `a` and `b` from both endpoints. Removing an
    /// edge that is absent, or a pair that was never adjacent, is a no-op.
    pub fn remove_edge(&mut self, a: Coordinate, b: Coordinate) {
        if !self.in_bounds(a) || !self.in_bounds(b) {
            return;
        }

        if let Some((bit, opposite)) = direction_bits(a, b) {
            self.cells[a.index(self.board_size)] &= !bit;
            self.cells[b.index(self.board_size)] &= !opposite;
        }
    }

    pub fn neighbors(&self, cell: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        let mask = self.cells[cell.index(self.board_size)];
        let board_size = self.board_size;

        DIRECTIONS
            .into_iter()
            .filter_map(move |(bit, delta)| (mask & bit != 0).then(|| cell.offset(delta, board_size)).flatten())
    }

    fn in_bounds(&self, cell: Coordinate) -> bool {
        cell.row < self.board_size && cell.col < self.board_size
    }
}

fn direction_bits(from: Coordinate, to: Coordinate) -> Option<(u8, u8)> {
    let dy = to.row as i16 - from.row as i16;
    let dx = to.col as i16 - from.col as i16;

    match (dy, dx) {
        (-1, 0) => Some((OPEN_UP, OPEN_DOWN)),
        (1, 0) => Some((OPEN_DOWN, OPEN_UP)),
        (0, 1) => Some((OPEN_RIGHT, OPEN_LEFT)),
        (0, -1) => Some((OPEN_LEFT, OPEN_RIGHT)),
        _ => None,
    }
}
