use std::collections::VecDeque;

use crate::{BoardGraph, Coordinate};

/// True iff a path exists from `start` to any cell on `goal_row`.
pub fn path_to_row_exists(graph: &BoardGraph, start: Coordinate, goal_row: u8) -> bool {
    if start.row == goal_row {
        return true;
    }

    let board_size = graph.board_size();
    let mut visited = vec![false; board_size as usize * board_size as usize];
    let mut queue = VecDeque::from([start]);
    visited[start.index(board_size)] = true;

    while let Some(cell) = queue.pop_front() {
        for neighbor in graph.neighbors(cell) {
            if visited[neighbor.index(board_size)] {
                continue;
            }
            if neighbor.row == goal_row {
                return true;
            }
            visited[neighbor.index(board_size)] = true;
            queue.push_back(neighbor);
        }
    }

    false
}

/// Shortest path from `start` to the nearest cell on `goal_row`, start and
/// goal inclusive. `None` means the row is unreachable, which is impossible
/// for a live game state: every wall placement is gated on both players
/// keeping a path, so callers treat `None` as an invariant violation.
pub fn shortest_path_to_row(
    graph: &BoardGraph,
    start: Coordinate,
    goal_row: u8,
) -> Option<Vec<Coordinate>> {
    if start.row == goal_row {
        return Some(vec![start]);
    }

    let board_size = graph.board_size();
    let mut parents: Vec<Option<Coordinate>> =
        vec![None; board_size as usize * board_size as usize];
    let mut visited = vec![false; board_size as usize * board_size as usize];
    let mut queue = VecDeque::from([start]);
    visited[start.index(board_size)] = true;

    while let Some(cell) = queue.pop_front() {
        for neighbor in graph.neighbors(cell) {
            if visited[neighbor.index(board_size)] {
                continue;
            }
            visited[neighbor.index(board_size)] = true;
            parents[neighbor.index(board_size)] = Some(cell);

            if neighbor.row == goal_row {
                return Some(reconstruct_path(&parents, board_size, neighbor));
            }

            queue.push_back(neighbor);
        }
    }

    None
}

fn reconstruct_path(
    parents: &[Option<Coordinate>],
    board_size: u8,
    end: Coordinate,
) -> Vec<Coordinate> {
    let mut path = vec![end];
    let mut current = end;

    while let Some(parent) = parents[current.index(board_size)] {
        path.push(parent);
        current = parent;
    }

    path.reverse();
    path
}
