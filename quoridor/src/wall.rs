use std::collections::BTreeSet;
use std::fmt;

use crate::Coordinate;

/// One unit edge severed by a wall, stored as a canonical unordered pair:
/// the lesser cell (row-major order) always comes first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WallSegment {
    a: Coordinate,
    b: Coordinate,
}

impl WallSegment {
    pub fn new(a: Coordinate, b: Coordinate) -> Self {
        assert!(
            a.is_adjacent(b),
            "wall segment cells {} and {} are not adjacent",
            a,
            b
        );

        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    pub fn cells(&self) -> (Coordinate, Coordinate) {
        (self.a, self.b)
    }
}

impl fmt::Display for WallSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

impl fmt::Debug for WallSegment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WallOrientation {
    Horizontal,
    Vertical,
}

/// A two-unit wall: the two adjacent edges one placement severs. Canonical at
/// construction, so two descriptions of the same physical wall compare equal,
/// hash equal and render the same name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wall {
    first: WallSegment,
    second: WallSegment,
}

impl Wall {
    pub fn new(edge1: (Coordinate, Coordinate), edge2: (Coordinate, Coordinate)) -> Self {
        let segment1 = WallSegment::new(edge1.0, edge1.1);
        let segment2 = WallSegment::new(edge2.0, edge2.1);

        if segment1 <= segment2 {
            Self {
                first: segment1,
                second: segment2,
            }
        } else {
            Self {
                first: segment2,
                second: segment1,
            }
        }
    }

    /// The wall lying along the boundary between rows `anchor.row` and
    /// `anchor.row + 1`, covering columns `anchor.col` and `anchor.col + 1`.
    pub fn horizontal(anchor: Coordinate) -> Self {
        let (row, col) = (anchor.row, anchor.col);
        Self::new(
            (Coordinate::new(row, col), Coordinate::new(row + 1, col)),
            (
                Coordinate::new(row, col + 1),
                Coordinate::new(row + 1, col + 1),
            ),
        )
    }

    /// The wall lying along the boundary between columns `anchor.col` and
    /// `anchor.col + 1`, covering rows `anchor.row` and `anchor.row + 1`.
    pub fn vertical(anchor: Coordinate) -> Self {
        let (row, col) = (anchor.row, anchor.col);
        Self::new(
            (Coordinate::new(row, col), Coordinate::new(row, col + 1)),
            (
                Coordinate::new(row + 1, col),
                Coordinate::new(row + 1, col + 1),
            ),
        )
    }

    pub fn segments(&self) -> [WallSegment; 2] {
        [self.first, self.second]
    }

    pub fn orientation(&self) -> WallOrientation {
        let (a, b) = self.first.cells();
        if a.row != b.row {
            WallOrientation::Horizontal
        } else {
            WallOrientation::Vertical
        }
    }

    /// The upper-left cell of the 2x2 junction this wall spans.
    pub fn anchor(&self) -> Coordinate {
        self.first.cells().0
    }

    /// The two segments a perpendicular wall through the same junction would
    /// occupy: the transpose pairing of this wall's four cells.
    fn transpose_segments(&self) -> [WallSegment; 2] {
        let (p1, p2) = self.first.cells();
        let (p3, p4) = self.second.cells();

        [WallSegment::new(p1, p3), WallSegment::new(p2, p4)]
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}_{}", self.first, self.second)
    }
}

impl fmt::Debug for Wall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Every wall segment placed so far. Only consulted for crossing detection;
/// traversal blocking lives in [`crate::BoardGraph`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallLedger {
    segments: BTreeSet<WallSegment>,
}

impl WallLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, wall: &Wall) {
        for segment in wall.segments() {
            self.segments.insert(segment);
        }
    }

    pub fn contains(&self, segment: &WallSegment) -> bool {
        self.segments.contains(segment)
    }

    /// True when `candidate` would cross a previously placed wall: both
    /// transpose segments of the candidate's junction are already recorded.
    /// Fails closed when either is absent.
    pub fn crossed_by(&self, candidate: &Wall) -> bool {
        candidate
            .transpose_segments()
            .iter()
            .all(|segment| self.contains(segment))
    }

    pub fn iter(&self) -> impl Iterator<Item = &WallSegment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: u8, col: u8) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn test_wall_name_ignores_construction_order() {
        let wall = Wall::horizontal(cell(2, 3));
        let swapped_edges = Wall::new(
            (cell(2, 4), cell(3, 4)),
            (cell(2, 3), cell(3, 3)),
        );
        let swapped_cells = Wall::new(
            (cell(3, 3), cell(2, 3)),
            (cell(3, 4), cell(2, 4)),
        );

        assert_eq!(wall, swapped_edges);
        assert_eq!(wall, swapped_cells);
        assert_eq!(wall.to_string(), swapped_edges.to_string());
        assert_eq!(wall.to_string(), swapped_cells.to_string());
        assert_eq!(wall.to_string(), "(2,3)-(3,3)_(2,4)-(3,4)");
    }

    #[test]
    fn test_horizontal_and_vertical_walls_differ() {
        assert_ne!(Wall::horizontal(cell(2, 2)), Wall::vertical(cell(2, 2)));
    }

    #[test]
    fn test_orientation_and_anchor() {
        let horizontal = Wall::horizontal(cell(4, 1));
        let vertical = Wall::vertical(cell(4, 1));

        assert_eq!(horizontal.orientation(), WallOrientation::Horizontal);
        assert_eq!(vertical.orientation(), WallOrientation::Vertical);
        assert_eq!(horizontal.anchor(), cell(4, 1));
        assert_eq!(vertical.anchor(), cell(4, 1));
    }

    #[test]
    fn test_crossing_at_shared_junction() {
        let mut ledger = WallLedger::new();
        ledger.record(&Wall::horizontal(cell(2, 2)));

        assert!(ledger.crossed_by(&Wall::vertical(cell(2, 2))));
    }

    #[test]
    fn test_crossing_is_symmetric() {
        let mut ledger = WallLedger::new();
        ledger.record(&Wall::vertical(cell(5, 5)));

        assert!(ledger.crossed_by(&Wall::horizontal(cell(5, 5))));
    }

    #[test]
    fn test_no_crossing_away_from_junction() {
        let mut ledger = WallLedger::new();
        ledger.record(&Wall::horizontal(cell(2, 2)));

        assert!(!ledger.crossed_by(&Wall::vertical(cell(2, 1))));
        assert!(!ledger.crossed_by(&Wall::vertical(cell(2, 3))));
        assert!(!ledger.crossed_by(&Wall::vertical(cell(1, 2))));
        assert!(!ledger.crossed_by(&Wall::horizontal(cell(3, 2))));
    }

    #[test]
    fn test_same_orientation_is_not_a_crossing() {
        let mut ledger = WallLedger::new();
        ledger.record(&Wall::horizontal(cell(2, 2)));

        // Overlap of parallel walls is caught by edge existence, not here.
        assert!(!ledger.crossed_by(&Wall::horizontal(cell(2, 2))));
        assert!(!ledger.crossed_by(&Wall::horizontal(cell(2, 3))));
    }

    #[test]
    fn test_ledger_records_both_segments() {
        let mut ledger = WallLedger::new();
        let wall = Wall::horizontal(cell(0, 0));

        ledger.record(&wall);

        assert_eq!(ledger.len(), 2);
        for segment in wall.segments() {
            assert!(ledger.contains(&segment));
        }
    }
}
