// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game rules and validation logic

use crate::{board::Board, groups, Color, Coord, GameError};

/// Check whether placing `color` at `coord` would be legal on `board`.
///
/// The check runs on a scratch copy of the board: the stone is placed,
/// opponent captures are resolved, and only then are the placed group's
/// liberties judged. Resolving captures first is what makes a move legal
/// when it fills its own last liberty but takes opposing stones in the
/// same turn.
pub fn check_move(board: &Board, coord: Coord, color: Color) -> Result<(), GameError> {
    if !coord.is_valid(board.size()) {
        return Err(GameError::OutOfBounds);
    }

    if board.get(coord).is_some() {
        return Err(GameError::CellOccupied);
    }

    let mut scratch = board.clone();
    scratch.place(coord, color);
    resolve_captures(&mut scratch, color.opposite());

    if let Some(group) = groups::group_at(&scratch, coord) {
        if group.is_captured() {
            tracing::debug!(x = coord.x, y = coord.y, "rejected move: self-capture");
            return Err(GameError::SelfCapture);
        }
    }

    // Ko is not enforced; the stub reports no violation for every position.
    debug_assert!(!ko_violation(&scratch));

    Ok(())
}

/// Remove every zero-liberty group of `color` from the board.
///
/// Returns the number of stones removed so the caller can credit the
/// captured-stones counter. Called for the opponent of the player who just
/// placed a stone, never for the mover's own color.
pub fn resolve_captures(board: &mut Board, color: Color) -> usize {
    let mut removed = 0;

    for group in groups::find_groups(board, color) {
        if group.is_captured() {
            for stone in &group.stones {
                board.remove(*stone);
            }
            removed += group.stones.len();
            tracing::debug!(
                stones = group.stones.len(),
                color = ?color,
                "captured group"
            );
        }
    }

    removed
}

/// Ko rule stub: always reports no violation.
/// TODO: positional superko via `Board::position_hash` history.
fn ko_violation(_board: &Board) -> bool {
    false
}
