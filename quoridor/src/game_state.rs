use engine::game_state;
use itertools::Itertools;

use crate::{
    pathing, Action, BoardGraph, Coordinate, GameOptions, MoveDirection, SpecialMove, Terminal,
    Wall, WallLedger,
};

#[derive(Clone, Debug)]
pub struct PlayerState {
    position: Coordinate,
    goal_row: u8,
    walls_remaining: u8,
}

impl PlayerState {
    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn goal_row(&self) -> u8 {
        self.goal_row
    }

    pub fn walls_remaining(&self) -> u8 {
        self.walls_remaining
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    options: GameOptions,
    graph: BoardGraph,
    walls: WallLedger,
    players: [PlayerState; 2],
    p1_turn_to_move: bool,
    move_number: usize,
}

impl GameState {
    pub fn new(options: GameOptions) -> Self {
        let board_size = options.board_size;
        assert!(board_size >= 2, "board size {} is too small", board_size);

        let center_col = board_size / 2;
        let players = [
            PlayerState {
                position: Coordinate::new(0, center_col),
                goal_row: board_size - 1,
                walls_remaining: options.walls_per_player,
            },
            PlayerState {
                position: Coordinate::new(board_size - 1, center_col),
                goal_row: 0,
                walls_remaining: options.walls_per_player,
            },
        ];

        Self {
            options,
            graph: BoardGraph::new(board_size),
            walls: WallLedger::new(),
            players,
            p1_turn_to_move: true,
            move_number: 1,
        }
    }

    pub fn options(&self) -> GameOptions {
        self.options
    }

    pub fn graph(&self) -> &BoardGraph {
        &self.graph
    }

    pub fn wall_ledger(&self) -> &WallLedger {
        &self.walls
    }

    pub fn move_number(&self) -> usize {
        self.move_number
    }

    pub fn player_to_move(&self) -> usize {
        if self.p1_turn_to_move {
            1
        } else {
            2
        }
    }

    pub fn player_info(&self, player: usize) -> &PlayerState {
        &self.players[player - 1]
    }

    pub fn take_action(&mut self, action: &Action) {
        match action {
            Action::Move(direction) => self.move_pawn(direction.delta()),
            Action::SpecialMove(special) => self.move_pawn(special.delta()),
            Action::PlaceWall(wall) => self.place_wall(wall),
        }

        self.increment_turn();
    }

    pub fn is_terminal(&self) -> Option<Terminal> {
        let last_player = if self.p1_turn_to_move { 2 } else { 1 };
        let info = self.player_info(last_player);

        if info.position.row == info.goal_row {
            Some(Terminal::Won {
                player: last_player,
            })
        } else if self.move_number >= self.options.max_moves {
            Some(Terminal::DrawByMoveCap)
        } else {
            None
        }
    }

    /// Pawn movement legal for the player to move, in direction-scan order
    /// up/right/left/down. A direction whose target cell holds the opponent
    /// contributes jump/diagonal moves in its place.
    pub fn valid_pawn_move_actions(&self) -> Vec<Action> {
        let position = self.active_player().position;
        let opponent = self.opponent_player().position;
        let board_size = self.options.board_size;
        let mut actions = Vec::new();

        for direction in MoveDirection::ALL {
            let target = match position.offset(direction.delta(), board_size) {
                Some(target) => target,
                None => continue,
            };

            if !self.graph.is_edge(position, target) {
                continue;
            }

            if target == opponent {
                actions.extend(self.special_move_actions());
            } else {
                actions.push(Action::Move(direction));
            }
        }

        actions
    }

    /// Wall placements legal for the player to move: horizontal anchors in
    /// row-major order, then vertical. Every candidate is gated on edge
    /// existence, crossing and both players keeping a path to their goal row.
    pub fn valid_wall_actions(&self) -> Vec<Action> {
        if self.active_player().walls_remaining == 0 {
            return Vec::new();
        }

        let anchor_limit = self.options.board_size - 1;
        let mut scratch = self.graph.clone();
        let mut actions = Vec::new();

        for (row, col) in (0..anchor_limit).cartesian_product(0..anchor_limit) {
            let wall = Wall::horizontal(Coordinate::new(row, col));
            if self.wall_is_legal(&wall, &mut scratch) {
                actions.push(Action::PlaceWall(wall));
            }
        }

        for (row, col) in (0..anchor_limit).cartesian_product(0..anchor_limit) {
            let wall = Wall::vertical(Coordinate::new(row, col));
            if self.wall_is_legal(&wall, &mut scratch) {
                actions.push(Action::PlaceWall(wall));
            }
        }

        actions
    }

    pub fn all_valid_actions(&self) -> Vec<Action> {
        let mut actions = self.valid_pawn_move_actions();
        actions.extend(self.valid_wall_actions());
        actions
    }

    fn special_move_actions(&self) -> Vec<Action> {
        let position = self.active_player().position;
        let opponent = self.opponent_player().position;
        let board_size = self.options.board_size;

        let dy = opponent.row as i8 - position.row as i8;
        let dx = opponent.col as i8 - position.col as i8;

        // A straight jump lands two cells past the mover; it needs the edge
        // on the far side of the opponent and preempts every diagonal. A far
        // side that is off the board counts as blocked.
        let jump_delta = (2 * dy, 2 * dx);
        if let Some(landing) = position.offset(jump_delta, board_size) {
            if self.graph.is_edge(opponent, landing) {
                if let Some(jump) = SpecialMove::from_delta(jump_delta) {
                    return vec![Action::SpecialMove(jump)];
                }
            }
        }

        let mut diagonals = Vec::new();

        if dx != 0 {
            for side_dy in [-1, 1] {
                if let Some(side) = opponent.offset((side_dy, 0), board_size) {
                    if self.graph.is_edge(opponent, side) {
                        if let Some(diagonal) = SpecialMove::from_delta((side_dy, dx)) {
                            diagonals.push(Action::SpecialMove(diagonal));
                        }
                    }
                }
            }
        }

        if dy != 0 {
            for side_dx in [-1, 1] {
                if let Some(side) = opponent.offset((0, side_dx), board_size) {
                    if self.graph.is_edge(opponent, side) {
                        if let Some(diagonal) = SpecialMove::from_delta((dy, side_dx)) {
                            diagonals.push(Action::SpecialMove(diagonal));
                        }
                    }
                }
            }
        }

        diagonals
    }

    fn wall_is_legal(&self, wall: &Wall, scratch: &mut BoardGraph) -> bool {
        for segment in wall.segments() {
            let (a, b) = segment.cells();
            if !self.graph.is_edge(a, b) {
                return false;
            }
        }

        if self.walls.crossed_by(wall) {
            return false;
        }

        scratch.clone_from(&self.graph);
        for segment in wall.segments() {
            let (a, b) = segment.cells();
            scratch.remove_edge(a, b);
        }

        self.players
            .iter()
            .all(|player| pathing::path_to_row_exists(scratch, player.position, player.goal_row))
    }

    fn move_pawn(&mut self, delta: (i8, i8)) {
        let board_size = self.options.board_size;
        let player = self.active_index();
        let from = self.players[player].position;

        let to = match from.offset(delta, board_size) {
            Some(to) => to,
            None => panic!("pawn move {:?} leaves the board from {}", delta, from),
        };

        self.players[player].position = to;
    }

    fn place_wall(&mut self, wall: &Wall) {
        let player = self.active_index();
        assert!(
            self.players[player].walls_remaining > 0,
            "player {} has no walls left to place {}",
            player + 1,
            wall
        );

        for segment in wall.segments() {
            let (a, b) = segment.cells();
            assert!(
                self.graph.is_edge(a, b),
                "wall {} severs the already-missing edge {}",
                wall,
                segment
            );
            self.graph.remove_edge(a, b);
        }

        self.walls.record(wall);
        self.players[player].walls_remaining -= 1;
    }

    fn increment_turn(&mut self) {
        self.p1_turn_to_move = !self.p1_turn_to_move;
        if self.p1_turn_to_move {
            self.move_number += 1;
        }
    }

    fn active_index(&self) -> usize {
        if self.p1_turn_to_move {
            0
        } else {
            1
        }
    }

    fn active_player(&self) -> &PlayerState {
        &self.players[self.active_index()]
    }

    fn opponent_player(&self) -> &PlayerState {
        &self.players[1 - self.active_index()]
    }
}

impl game_state::GameState for GameState {
    fn initial() -> Self {
        GameState::new(GameOptions::default())
    }
}
