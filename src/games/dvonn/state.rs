//! Dvonn state machine.
//!
//! ## Phases
//!
//! `PlaceNeutralPieces -> PlacePieces -> MovePieces -> GameOver`, never
//! backwards.
//!
//! - **PlaceNeutralPieces**: players alternate dropping neutral pieces. The
//!   player who drops the last one also opens the next phase.
//! - **PlacePieces**: players alternate dropping their own pieces. Once the
//!   player due next has none left, movement begins.
//! - **MovePieces**: a stack of height `h` jumps exactly `h` cells in a hex
//!   direction onto another stack and takes it over. Stacks cut off from
//!   every neutral piece are removed. A player with no move passes; when
//!   neither player can move the game ends and the taller total wins.
//!
//! Illegal actions are rejected without touching the state.
//! `try_apply_action` reports the reason, `apply_action` drops it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::action::Action;
use super::error::{ActionError, StateError};
use super::movegen;
use crate::board::{find_islands, Board, Cell, Coord, Occupant};
use crate::core::{GameConfig, PlayerId, PlayerMap};
use crate::rules::{GameResult, SearchState};

/// Game phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    PlaceNeutralPieces,
    PlacePieces,
    MovePieces,
    GameOver,
}

impl Phase {
    /// True for either placement phase.
    #[must_use]
    pub fn is_placement(self) -> bool {
        matches!(self, Phase::PlaceNeutralPieces | Phase::PlacePieces)
    }
}

/// Complete state of one game.
///
/// Plain owned data: `clone()` is a deep copy, so bots can mutate clones
/// without affecting the caller's game. Serializing it yields the
/// snapshot a UI needs (board, phase, turn, scores, result, last action,
/// legal actions). Decoding a snapshot checks it and rebuilds the scores
/// and legal actions from the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateRepr")]
pub struct DvonnState {
    board: Board,
    phase: Phase,
    current_player: PlayerId,

    /// Pieces each player still has to place.
    pieces: PlayerMap<u32>,

    /// Neutral pieces still to place.
    neutral_pieces: u32,

    /// Cells whose stack carries a neutral piece. No duplicates.
    neutral_positions: Vec<Coord>,

    /// Cached legal actions for `current_player`.
    legal_actions: Vec<Action>,

    last_action: Option<Action>,
    last_actor: Option<PlayerId>,

    /// Sum of controlled stack heights per player.
    scores: PlayerMap<u32>,

    result: Option<GameResult>,
}

#[derive(Deserialize)]
struct StateRepr {
    board: Board,
    phase: Phase,
    current_player: PlayerId,
    pieces: PlayerMap<u32>,
    neutral_pieces: u32,
    neutral_positions: Vec<Coord>,
    last_action: Option<Action>,
    last_actor: Option<PlayerId>,
    result: Option<GameResult>,
}

impl TryFrom<StateRepr> for DvonnState {
    type Error = StateError;

    fn try_from(repr: StateRepr) -> Result<Self, Self::Error> {
        DvonnState::check_seat(repr.current_player)?;
        if let Some(actor) = repr.last_actor {
            DvonnState::check_seat(actor)?;
        }
        if let Some(GameResult::Winner(winner)) = repr.result {
            DvonnState::check_seat(winner)?;
        }
        if repr.pieces.player_count() != Self::PLAYER_COUNT {
            return Err(StateError::PlayerCount {
                field: "pieces",
                expected: Self::PLAYER_COUNT,
                actual: repr.pieces.player_count(),
            });
        }
        repr.board.validate(Self::PLAYER_COUNT)?;
        check_neutral_positions(&repr.board, &repr.neutral_positions)?;

        let mut state = Self {
            scores: repr.board.stack_totals(Self::PLAYER_COUNT),
            board: repr.board,
            phase: repr.phase,
            current_player: repr.current_player,
            pieces: repr.pieces,
            neutral_pieces: repr.neutral_pieces,
            neutral_positions: repr.neutral_positions,
            legal_actions: Vec::new(),
            last_action: repr.last_action,
            last_actor: repr.last_actor,
            result: repr.result,
        };
        state.refresh_legal_actions();
        Ok(state)
    }
}

/// Every listed position holds a neutral piece, once, and no neutral
/// piece is missing from the list.
fn check_neutral_positions(board: &Board, positions: &[Coord]) -> Result<(), StateError> {
    let mut seen = FxHashSet::default();
    for &at in positions {
        let holds_neutral = board.get(at).is_some_and(|cell| cell.neutral);
        if !holds_neutral || !seen.insert(at) {
            return Err(StateError::NeutralMismatch(at));
        }
    }
    match board.iter().find(|(at, cell)| cell.neutral && !seen.contains(at)) {
        Some((at, _)) => Err(StateError::NeutralMismatch(at)),
        None => Ok(()),
    }
}

impl Default for DvonnState {
    fn default() -> Self {
        Self::new()
    }
}

impl DvonnState {
    pub const PLAYER_COUNT: usize = GameConfig::PLAYER_COUNT;

    /// A fresh game on the standard board.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// A fresh game with custom geometry or piece counts.
    #[must_use]
    pub fn with_config(config: &GameConfig) -> Self {
        let mut state = Self {
            board: Board::new(config),
            phase: Phase::PlaceNeutralPieces,
            current_player: PlayerId::new(0),
            pieces: PlayerMap::with_value(Self::PLAYER_COUNT, config.pieces_per_player),
            neutral_pieces: config.neutral_pieces,
            neutral_positions: Vec::new(),
            legal_actions: Vec::new(),
            last_action: None,
            last_actor: None,
            scores: PlayerMap::with_value(Self::PLAYER_COUNT, 0),
            result: None,
        };

        if state.neutral_pieces == 0 {
            state.phase = Phase::PlacePieces;
        }
        if state.phase == Phase::PlacePieces && state.pieces[state.current_player] == 0 {
            state.finish_placement();
        } else {
            state.refresh_legal_actions();
        }
        state
    }

    /// A movement-phase position built from an arbitrary board.
    ///
    /// Neutral positions and scores are derived from the board. If neither
    /// player can move the state is already over. The board is taken as
    /// is: islands without a neutral piece are not cleared until a move
    /// touches them.
    pub fn from_board(board: Board, current_player: PlayerId) -> Result<Self, StateError> {
        Self::check_seat(current_player)?;
        board.validate(Self::PLAYER_COUNT)?;

        let neutral_positions = board
            .iter()
            .filter(|(_, cell)| cell.neutral)
            .map(|(coord, _)| coord)
            .collect();
        let scores = board.stack_totals(Self::PLAYER_COUNT);

        let mut state = Self {
            board,
            phase: Phase::PlacePieces,
            current_player,
            pieces: PlayerMap::with_value(Self::PLAYER_COUNT, 0),
            neutral_pieces: 0,
            neutral_positions,
            legal_actions: Vec::new(),
            last_action: None,
            last_actor: None,
            scores,
            result: None,
        };
        state.enter_movement();
        Ok(state)
    }

    fn check_seat(player: PlayerId) -> Result<(), StateError> {
        if player.index() < Self::PLAYER_COUNT {
            Ok(())
        } else {
            Err(StateError::UnknownPlayer(player))
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn pieces_remaining(&self, player: PlayerId) -> u32 {
        self.pieces[player]
    }

    #[must_use]
    pub fn neutral_pieces_remaining(&self) -> u32 {
        self.neutral_pieces
    }

    #[must_use]
    pub fn neutral_positions(&self) -> &[Coord] {
        &self.neutral_positions
    }

    /// Cached legal actions for the player to act.
    #[must_use]
    pub fn legal_actions(&self) -> &[Action] {
        &self.legal_actions
    }

    /// Legal moves starting at `from`, for highlighting a selected stack.
    #[must_use]
    pub fn legal_moves_from(&self, from: Coord) -> Vec<Action> {
        self.legal_actions
            .iter()
            .filter(|a| matches!(a, Action::Move { from: f, .. } if *f == from))
            .copied()
            .collect()
    }

    #[must_use]
    pub fn is_legal(&self, action: &Action) -> bool {
        self.legal_actions.contains(action)
    }

    #[must_use]
    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }

    /// Player who applied `last_action`.
    #[must_use]
    pub fn last_actor(&self) -> Option<PlayerId> {
        self.last_actor
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    // === Actions ===

    /// Apply `action`, or explain why it was rejected.
    pub fn try_apply_action(&mut self, action: &Action) -> Result<(), ActionError> {
        match (self.phase, *action) {
            (Phase::GameOver, _) => Err(ActionError::GameOver),
            (Phase::PlaceNeutralPieces, Action::Place { row, col }) => {
                self.place_neutral(Coord::new(row, col))
            }
            (Phase::PlacePieces, Action::Place { row, col }) => {
                self.place_piece(Coord::new(row, col))
            }
            (Phase::MovePieces, Action::Move { from, to }) => self.move_stack(from, to),
            (phase, action) => Err(ActionError::WrongPhase {
                phase,
                kind: action.kind(),
            }),
        }
    }

    /// Apply `action`; illegal actions are a silent no-op.
    pub fn apply_action(&mut self, action: &Action) {
        if let Err(err) = self.try_apply_action(action) {
            trace!(%action, %err, "action rejected");
        }
    }

    fn check_placement(&self, at: Coord) -> Result<(), ActionError> {
        match self.board.get(at) {
            None => Err(ActionError::OutOfGrid(at)),
            Some(cell) if !cell.is_empty() => Err(ActionError::CellNotEmpty(at)),
            Some(_) => Ok(()),
        }
    }

    fn place_neutral(&mut self, at: Coord) -> Result<(), ActionError> {
        self.check_placement(at)?;
        debug_assert!(self.neutral_pieces > 0);

        self.set_cell(at, Cell::NEUTRAL);
        self.neutral_pieces -= 1;
        self.neutral_positions.push(at);
        self.record(Action::place(at));

        if self.neutral_pieces > 0 {
            self.current_player = self.other(self.current_player);
            self.refresh_legal_actions();
            return Ok(());
        }

        // The player who placed the last neutral piece keeps the turn.
        self.phase = Phase::PlacePieces;
        debug!(player = %self.current_player, "neutral pieces placed");
        if self.pieces[self.current_player] == 0 {
            self.finish_placement();
        } else {
            self.refresh_legal_actions();
        }
        Ok(())
    }

    fn place_piece(&mut self, at: Coord) -> Result<(), ActionError> {
        self.check_placement(at)?;
        let player = self.current_player;
        debug_assert!(self.pieces[player] > 0);

        self.set_cell(at, Cell::piece(player));
        self.pieces[player] = self.pieces[player].saturating_sub(1);
        self.record(Action::place(at));
        self.update_scores();

        self.current_player = self.other(player);
        if self.pieces[self.current_player] == 0 {
            self.finish_placement();
        } else {
            self.refresh_legal_actions();
        }
        Ok(())
    }

    fn move_stack(&mut self, from: Coord, to: Coord) -> Result<(), ActionError> {
        let action = Action::movement(from, to);
        let (Some(&source), Some(&target)) = (self.board.get(from), self.board.get(to)) else {
            let off = if self.board.in_grid(from) { to } else { from };
            return Err(ActionError::OutOfGrid(off));
        };
        if !self.legal_actions.contains(&action) {
            return Err(ActionError::NotLegal(action));
        }
        debug_assert_eq!(self.phase, Phase::MovePieces);
        debug_assert_eq!(source.owner(), Some(self.current_player));

        let mover = self.current_player;
        self.set_cell(
            to,
            Cell {
                occupant: Occupant::Player(mover),
                height: source.height + target.height,
                neutral: source.neutral || target.neutral,
            },
        );
        self.set_cell(from, Cell::EMPTY);

        if source.neutral {
            self.neutral_positions.retain(|&c| c != from);
            if !self.neutral_positions.contains(&to) {
                self.neutral_positions.push(to);
            }
        }
        self.record(action);

        self.remove_isolated(from, to);
        self.update_scores();
        self.resolve_turn(self.other(mover));
        Ok(())
    }

    /// Clear islands touched by the move from `from` to `to` that no longer
    /// contain a neutral piece. Islands the move could not have changed
    /// are left alone.
    fn remove_isolated(&mut self, from: Coord, to: Coord) {
        let mut touched: FxHashSet<Coord> = from.neighbors().into_iter().collect();
        touched.insert(to);
        self.clear_islands(Some(&touched));
    }

    /// Clear islands without a neutral piece. With `touched`, only islands
    /// containing one of those cells are considered.
    fn clear_islands(&mut self, touched: Option<&FxHashSet<Coord>>) {
        for island in find_islands(&self.board) {
            if island.has_neutral(&self.board) {
                continue;
            }
            if touched.is_some_and(|t| !island.cells.iter().any(|c| t.contains(c))) {
                continue;
            }
            debug!(cells = island.len(), "removing island cut off from neutral pieces");
            for coord in island.cells {
                self.set_cell(coord, Cell::EMPTY);
            }
        }
    }

    /// End of placement: a sparse board may leave whole islands without
    /// a neutral piece, and those are gone before the first move.
    fn finish_placement(&mut self) {
        self.clear_islands(None);
        self.update_scores();
        self.enter_movement();
    }

    fn enter_movement(&mut self) {
        self.phase = Phase::MovePieces;
        debug!(player = %self.current_player, "movement phase begins");
        self.resolve_turn(self.current_player);
    }

    /// Hand the turn to `candidate` if it can move, otherwise to the other
    /// player, otherwise end the game.
    fn resolve_turn(&mut self, candidate: PlayerId) {
        self.current_player = candidate;
        self.refresh_legal_actions();
        if !self.legal_actions.is_empty() {
            return;
        }

        self.current_player = self.other(candidate);
        self.refresh_legal_actions();
        if !self.legal_actions.is_empty() {
            debug!(passed = %candidate, "player has no move and passes");
            return;
        }

        self.finish();
    }

    fn finish(&mut self) {
        self.phase = Phase::GameOver;
        self.legal_actions.clear();

        let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
        let result = match self.scores[p0].cmp(&self.scores[p1]) {
            std::cmp::Ordering::Greater => GameResult::Winner(p0),
            std::cmp::Ordering::Less => GameResult::Winner(p1),
            std::cmp::Ordering::Equal => GameResult::Draw,
        };
        self.result = Some(result);
        debug!(
            score0 = self.scores[p0],
            score1 = self.scores[p1],
            ?result,
            "game over"
        );
    }

    // === Helpers ===

    fn other(&self, player: PlayerId) -> PlayerId {
        player.next(Self::PLAYER_COUNT)
    }

    fn set_cell(&mut self, at: Coord, cell: Cell) {
        if let Some(slot) = self.board.get_mut(at) {
            *slot = cell;
        }
    }

    fn record(&mut self, action: Action) {
        self.last_action = Some(action);
        self.last_actor = Some(self.current_player);
    }

    fn update_scores(&mut self) {
        self.scores = self.board.stack_totals(Self::PLAYER_COUNT);
    }

    fn refresh_legal_actions(&mut self) {
        self.legal_actions = movegen::legal_actions(&self.board, self.phase, self.current_player);
    }
}

impl SearchState for DvonnState {
    type Action = Action;

    fn player_count(&self) -> usize {
        Self::PLAYER_COUNT
    }

    fn current_player(&self) -> PlayerId {
        self.current_player
    }

    fn is_terminal(&self) -> bool {
        self.is_game_over()
    }

    fn result(&self) -> Option<GameResult> {
        self.result
    }

    fn legal_actions(&self) -> Vec<Action> {
        self.legal_actions.clone()
    }

    fn apply_action(&mut self, action: &Action) {
        DvonnState::apply_action(self, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn place(state: &mut DvonnState, row: i32, col: i32) {
        state
            .try_apply_action(&Action::place(Coord::new(row, col)))
            .unwrap();
    }

    fn small_config() -> GameConfig {
        GameConfig::default()
            .with_size(1, 4)
            .with_neutral_pieces(1)
            .with_pieces_per_player(1)
    }

    #[test]
    fn test_initial_state() {
        let state = DvonnState::new();

        assert_eq!(state.phase(), Phase::PlaceNeutralPieces);
        assert_eq!(state.current_player(), P0);
        assert_eq!(state.neutral_pieces_remaining(), 3);
        assert_eq!(state.pieces_remaining(P0), 23);
        assert_eq!(state.pieces_remaining(P1), 23);
        assert_eq!(state.legal_actions().len(), 49);
        assert_eq!(state.last_action(), None);
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_neutral_placement_alternates_then_keeps_player() {
        let mut state = DvonnState::new();

        place(&mut state, 2, 2);
        assert_eq!(state.current_player(), P1);
        place(&mut state, 2, 5);
        assert_eq!(state.current_player(), P0);
        place(&mut state, 2, 8);

        assert_eq!(state.phase(), Phase::PlacePieces);
        assert_eq!(state.current_player(), P0);
        assert_eq!(state.neutral_positions().len(), 3);
        assert_eq!(state.legal_actions().len(), 46);
        assert_eq!(state.last_actor(), Some(P0));
    }

    #[test]
    fn test_placement_rejects_occupied_and_off_grid() {
        let mut state = DvonnState::new();
        place(&mut state, 2, 2);
        let before = state.clone();

        assert_eq!(
            state.try_apply_action(&Action::place(Coord::new(2, 2))),
            Err(ActionError::CellNotEmpty(Coord::new(2, 2)))
        );
        assert_eq!(
            state.try_apply_action(&Action::place(Coord::new(0, 0))),
            Err(ActionError::CellNotEmpty(Coord::new(0, 0)))
        );
        assert_eq!(
            state.try_apply_action(&Action::place(Coord::new(-1, 40))),
            Err(ActionError::OutOfGrid(Coord::new(-1, 40)))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_during_placement_is_wrong_phase() {
        let mut state = DvonnState::new();
        let before = state.clone();
        let err = state
            .try_apply_action(&Action::movement(Coord::new(2, 2), Coord::new(2, 3)))
            .unwrap_err();

        assert_eq!(
            err,
            ActionError::WrongPhase {
                phase: Phase::PlaceNeutralPieces,
                kind: "move"
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_piece_placement_scores_and_transition() {
        // 1x4 strip: N . . .
        let mut state = DvonnState::with_config(&small_config());
        place(&mut state, 0, 0);
        assert_eq!(state.phase(), Phase::PlacePieces);
        assert_eq!(state.current_player(), P0);

        place(&mut state, 0, 1);
        assert_eq!(state.score(P0), 1);
        assert_eq!(state.current_player(), P1);
        assert_eq!(state.phase(), Phase::PlacePieces);

        place(&mut state, 0, 2);
        assert_eq!(state.score(P1), 1);
        assert_eq!(state.phase(), Phase::MovePieces);
        assert_eq!(state.current_player(), P0);
        assert_eq!(
            state.legal_actions(),
            &[
                Action::movement(Coord::new(0, 1), Coord::new(0, 0)),
                Action::movement(Coord::new(0, 1), Coord::new(0, 2)),
            ]
        );
    }

    #[test]
    fn test_move_stacks_and_takes_neutral() {
        let mut state = DvonnState::with_config(&small_config());
        place(&mut state, 0, 0);
        place(&mut state, 0, 1);
        place(&mut state, 0, 2);

        state
            .try_apply_action(&Action::movement(Coord::new(0, 1), Coord::new(0, 0)))
            .unwrap();

        let cell = *state.board().get(Coord::new(0, 0)).unwrap();
        assert_eq!(cell.occupant, Occupant::Player(P0));
        assert_eq!(cell.height, 2);
        assert!(cell.neutral);
        assert!(state.board().get(Coord::new(0, 1)).unwrap().is_empty());

        // (0,2) lost contact with every neutral piece and is removed.
        assert!(state.board().get(Coord::new(0, 2)).unwrap().is_empty());
        assert_eq!(state.score(P0), 2);
        assert_eq!(state.score(P1), 0);

        // Nobody can move any more.
        assert!(state.is_game_over());
        assert_eq!(state.result(), Some(GameResult::Winner(P0)));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_neutral_position_follows_moving_stack() {
        let mut board = Board::new(&GameConfig::default());
        let a = Coord::new(2, 4);
        let b = Coord::new(2, 5);
        let c = Coord::new(2, 6);
        *board.get_mut(a).unwrap() = Cell { neutral: true, ..Cell::piece(P0) };
        *board.get_mut(b).unwrap() = Cell::piece(P1);
        *board.get_mut(c).unwrap() = Cell::NEUTRAL;

        let mut state = DvonnState::from_board(board, P0).unwrap();
        state.apply_action(&Action::movement(a, b));

        assert_eq!(state.neutral_positions(), &[c, b]);
        assert_eq!(state.last_actor(), Some(P0));
    }

    #[test]
    fn test_player_without_moves_passes() {
        // P1's only stack is too tall to land anywhere; P0 keeps the turn.
        let mut board = Board::new(&GameConfig::default());
        *board.get_mut(Coord::new(3, 0)).unwrap() = Cell::NEUTRAL;
        *board.get_mut(Coord::new(4, 0)).unwrap() = Cell { height: 5, ..Cell::piece(P1) };
        *board.get_mut(Coord::new(2, 2)).unwrap() = Cell::NEUTRAL;
        for col in 3..=6 {
            *board.get_mut(Coord::new(2, col)).unwrap() = Cell::piece(P0);
        }

        let mut state = DvonnState::from_board(board, P0).unwrap();
        assert_eq!(state.current_player(), P0);
        assert!(movegen::movement_actions(state.board(), P1).is_empty());

        state
            .try_apply_action(&Action::movement(Coord::new(2, 6), Coord::new(2, 5)))
            .unwrap();

        assert!(!state.is_game_over());
        assert_eq!(state.current_player(), P0);
        assert_eq!(state.last_actor(), Some(P0));
        assert_eq!(state.score(P0), 4);
        assert_eq!(state.score(P1), 5);
    }

    #[test]
    fn test_from_board_with_no_moves_is_over() {
        let mut board = Board::new(&GameConfig::default());
        *board.get_mut(Coord::new(2, 2)).unwrap() = Cell { height: 4, ..Cell::piece(P0) };
        *board.get_mut(Coord::new(2, 8)).unwrap() = Cell { height: 4, ..Cell::piece(P1) };

        let state = DvonnState::from_board(board, P0).unwrap();
        assert!(state.is_game_over());
        assert_eq!(state.result(), Some(GameResult::Draw));
        assert_eq!(SearchState::values(&state)[P0], 0.5);
    }

    #[test]
    fn test_actions_after_game_over_are_rejected() {
        let mut board = Board::new(&GameConfig::default());
        *board.get_mut(Coord::new(2, 2)).unwrap() = Cell::piece(P0);
        let mut state = DvonnState::from_board(board, P0).unwrap();

        assert_eq!(
            state.try_apply_action(&Action::place(Coord::new(3, 3))),
            Err(ActionError::GameOver)
        );
        assert_eq!(state.winner(), Some(P0));
    }

    #[test]
    fn test_legal_moves_from() {
        let state = {
            let mut s = DvonnState::with_config(&small_config());
            place(&mut s, 0, 0);
            place(&mut s, 0, 1);
            place(&mut s, 0, 2);
            s
        };

        assert_eq!(state.legal_moves_from(Coord::new(0, 1)).len(), 2);
        assert!(state.legal_moves_from(Coord::new(0, 2)).is_empty());
    }

    #[test]
    fn test_placement_end_clears_islands_without_neutral() {
        // 1x6 strip: N 0 0 . 1 1, the right pair never touches the neutral.
        let config = GameConfig::default()
            .with_size(1, 6)
            .with_neutral_pieces(1)
            .with_pieces_per_player(2);
        let mut state = DvonnState::with_config(&config);
        for col in [0, 1, 4, 2, 5] {
            place(&mut state, 0, col);
        }

        assert_eq!(state.phase(), Phase::MovePieces);
        assert_eq!(state.current_player(), P0);
        assert!(state.board().get(Coord::new(0, 4)).unwrap().is_empty());
        assert!(state.board().get(Coord::new(0, 5)).unwrap().is_empty());
        assert_eq!(state.score(P0), 2);
        assert_eq!(state.score(P1), 0);
        assert!(state.legal_actions().iter().all(|a| matches!(
            a,
            Action::Move { from, .. } if from.col < 3
        )));

        state
            .try_apply_action(&Action::movement(Coord::new(0, 1), Coord::new(0, 0)))
            .unwrap();
        assert_eq!(state.score(P1), 0);
        assert!(movegen::movement_actions(state.board(), P1).is_empty());
    }

    #[test]
    fn test_from_board_rejects_unknown_players() {
        let board = Board::new(&GameConfig::default());
        assert_eq!(
            DvonnState::from_board(board.clone(), PlayerId::new(2)),
            Err(StateError::UnknownPlayer(PlayerId::new(2)))
        );

        let mut board = board;
        *board.get_mut(Coord::new(2, 2)).unwrap() = Cell::piece(PlayerId::new(3));
        assert!(matches!(
            DvonnState::from_board(board, P0),
            Err(StateError::Board(_))
        ));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut state = DvonnState::with_config(&small_config());
        place(&mut state, 0, 0);
        place(&mut state, 0, 1);

        let json = serde_json::to_string(&state).unwrap();
        let decoded: DvonnState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_snapshot_with_missing_cells_is_rejected() {
        let mut json = serde_json::to_value(DvonnState::new()).unwrap();
        json["board"]["cells"] = serde_json::json!([]);

        assert!(serde_json::from_value::<DvonnState>(json).is_err());
    }

    #[test]
    fn test_snapshot_inconsistencies_are_rejected() {
        let mut state = DvonnState::new();
        place(&mut state, 2, 2);
        let json = serde_json::to_value(&state).unwrap();

        let mut bad_player = json.clone();
        bad_player["current_player"] = serde_json::json!(7);
        assert!(serde_json::from_value::<DvonnState>(bad_player).is_err());

        let mut bad_pieces = json.clone();
        bad_pieces["pieces"]["data"] = serde_json::json!([]);
        assert!(serde_json::from_value::<DvonnState>(bad_pieces).is_err());

        let mut bad_neutrals = json;
        bad_neutrals["neutral_positions"] = serde_json::json!([]);
        assert!(serde_json::from_value::<DvonnState>(bad_neutrals).is_err());
    }

    #[test]
    fn test_snapshot_rebuilds_cached_actions() {
        let state = DvonnState::new();
        let mut json = serde_json::to_value(&state).unwrap();
        json["legal_actions"] = serde_json::json!([]);
        json["scores"] = serde_json::json!({ "data": [9, 9] });

        let decoded: DvonnState = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.legal_actions().len(), 49);
        assert_eq!(decoded.scores(), state.scores());
    }
}
