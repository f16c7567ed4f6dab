// SPDX-License-Identifier: MIT OR Apache-2.0

//! Goban Core - Game Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - Go board representation and manipulation
//! - Group discovery, liberty counting and capture resolution
//! - Legal-move validation with correct capture-before-suicide ordering
//! - Stones-plus-prisoners scoring and snapshot serialization

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod engine;
pub mod groups;
pub mod history;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;

use board::Board;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Player color in a Go game (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Black player (traditionally goes first)
    Black,
    /// White player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Board coordinate representing a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column)
    pub x: u8,
    /// Y coordinate (row)
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if coordinate is valid for a board of given size
    pub fn is_valid(&self, board_size: u8) -> bool {
        self.x < board_size && self.y < board_size
    }
}

/// Represents a move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Place a stone at the specified coordinate
    Place(Coord),
    /// Pass the turn
    Pass,
}

impl Move {
    /// Build a move from signed (row, col) input as used by wire consumers.
    ///
    /// The off-grid sentinel `(-1, -1)` means pass; any other negative or
    /// oversized component is out of bounds. Board-size bounds are checked
    /// later, at application time.
    pub fn from_signed(row: i32, col: i32) -> Result<Self, GameError> {
        if (row, col) == (-1, -1) {
            return Ok(Move::Pass);
        }
        let x = u8::try_from(col).map_err(|_| GameError::OutOfBounds)?;
        let y = u8::try_from(row).map_err(|_| GameError::OutOfBounds)?;
        Ok(Move::Place(Coord::new(x, y)))
    }
}

/// Represents the current state of a Go game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The size of the board (typically 9, 13, or 19)
    pub board_size: u8,
    /// The current board positions
    pub board: Board,
    /// The player whose turn it is
    pub current_player: Color,
    /// History of moves, append-only
    pub moves: Vec<Move>,
    /// Black stones captured by White
    pub captured_black: u16,
    /// White stones captured by Black
    pub captured_white: u16,
    /// Set once two consecutive passes are recorded; terminal
    pub ended: bool,
}

impl GameState {
    /// Create a new game with the specified board size
    pub fn new(board_size: u8) -> Self {
        Self {
            board_size,
            board: Board::new(board_size),
            current_player: Color::Black, // Black goes first
            moves: Vec::new(),
            captured_black: 0,
            captured_white: 0,
            ended: false,
        }
    }

    /// Apply a move to the game state.
    ///
    /// Validation runs to completion before anything is written, so a
    /// rejected move leaves the state exactly as it was.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        if self.ended {
            return Err(GameError::GameAlreadyEnded);
        }

        match mv {
            Move::Place(coord) => {
                rules::check_move(&self.board, coord, self.current_player)?;

                self.board.place(coord, self.current_player);
                let opponent = self.current_player.opposite();
                let removed = rules::resolve_captures(&mut self.board, opponent);
                match opponent {
                    Color::Black => self.captured_black += removed as u16,
                    Color::White => self.captured_white += removed as u16,
                }
                debug_assert!(
                    groups::no_dead_groups(&self.board),
                    "a zero-liberty group survived capture resolution"
                );

                self.current_player = opponent;
                self.moves.push(mv);
            }
            Move::Pass => {
                let second_pass = matches!(self.moves.last(), Some(Move::Pass));
                self.moves.push(Move::Pass);
                if second_pass {
                    self.ended = true;
                    tracing::debug!(moves = self.moves.len(), "game ended by double pass");
                } else {
                    self.current_player = self.current_player.opposite();
                }
            }
        }

        Ok(())
    }

    /// Place a stone using signed (row, col) input; `(-1, -1)` routes to pass
    pub fn place_stone(&mut self, row: i32, col: i32) -> Result<(), GameError> {
        self.apply_move(Move::from_signed(row, col)?)
    }

    /// Pass the turn
    pub fn pass(&mut self) -> Result<(), GameError> {
        self.apply_move(Move::Pass)
    }

    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        self.ended
    }

    /// Count stones of specified color on the board
    pub fn count_stones_for(&self, color: Color) -> usize {
        self.board.count(color)
    }
}

/// Errors that can occur during game play
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("coordinate is outside the board")]
    OutOfBounds,

    /// The cell is already occupied
    #[error("cell is already occupied")]
    CellOccupied,

    /// The move would leave its own group with no liberties
    #[error("move would result in self-capture")]
    SelfCapture,

    /// The game has already ended
    #[error("game has already ended")]
    GameAlreadyEnded,
}

// Re-export the score types for convenience
pub use scoring::{ScoreSummary, Winner};
