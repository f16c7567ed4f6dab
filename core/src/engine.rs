// SPDX-License-Identifier: MIT OR Apache-2.0

//! Consumer-facing engine interface: move enumeration, board views and
//! the agent seam

use crate::{rules, Color, Coord, GameError, GameState, Move};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// Absolute-color cell encoding for presentation layers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum CellState {
    Empty = 0,
    Black = 1,
    White = 2,
}

/// Cell as seen from the player to move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum RelativeCell {
    Empty = 0,
    Own = 1,
    Opponent = 2,
}

/// All moves the current player may legally make, in raster order.
///
/// Excludes occupied cells and cells that would be rejected as
/// self-capture. Empty once the game has ended.
pub fn legal_moves(state: &GameState) -> Vec<Coord> {
    if state.ended {
        return Vec::new();
    }

    state
        .board
        .coords()
        .filter(|&coord| rules::check_move(&state.board, coord, state.current_player).is_ok())
        .collect()
}

/// Board in absolute colors, row-major
pub fn board_view(state: &GameState) -> Vec<CellState> {
    state
        .board
        .cells()
        .iter()
        .map(|cell| match cell {
            None => CellState::Empty,
            Some(Color::Black) => CellState::Black,
            Some(Color::White) => CellState::White,
        })
        .collect()
}

/// Board as seen by the player to move.
///
/// A pure mapping over the absolute view; storage never depends on turn
/// parity.
pub fn relative_view(state: &GameState) -> Vec<RelativeCell> {
    let own = state.current_player;
    state
        .board
        .cells()
        .iter()
        .map(|cell| match cell {
            None => RelativeCell::Empty,
            Some(color) if *color == own => RelativeCell::Own,
            Some(_) => RelativeCell::Opponent,
        })
        .collect()
}

/// Apply a sequence of signed (row, col) moves, stopping at the first
/// rejected move
pub fn apply_sequence(state: &mut GameState, sequence: &[(i32, i32)]) -> Result<(), GameError> {
    for &(row, col) in sequence {
        state.place_stone(row, col)?;
    }
    Ok(())
}

/// Move selection seam for agents and frontends.
///
/// Implementations only need the "list legal moves, pick one" contract;
/// they never see engine internals.
pub trait MovePicker {
    /// Get the next move from this player
    fn next_move(&mut self, state: &GameState) -> Move;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PassingPlayer;

    impl MovePicker for PassingPlayer {
        fn next_move(&mut self, _state: &GameState) -> Move {
            Move::Pass
        }
    }

    #[test]
    fn move_picker_drives_a_game_to_its_end() {
        let mut game = GameState::new(9);
        let mut player = PassingPlayer;

        while !game.is_game_over() {
            let mv = player.next_move(&game);
            game.apply_move(mv).unwrap();
        }

        assert_eq!(game.moves.len(), 2);
    }

    #[test]
    fn relative_view_follows_the_mover() {
        let mut game = GameState::new(5);
        game.place_stone(0, 0).unwrap();

        // White to move: the black stone reads as the opponent's
        let view = relative_view(&game);
        assert_eq!(view[0], RelativeCell::Opponent);

        game.place_stone(4, 4).unwrap();

        // Black to move again: the same stone is now "own"
        let view = relative_view(&game);
        assert_eq!(view[0], RelativeCell::Own);
    }
}
