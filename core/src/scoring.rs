use crate::{Color, GameState};
use serde::{Deserialize, Serialize};

/// Stones-plus-prisoners score summary.
///
/// This is deliberately simplified scoring: no dead-stone removal, no
/// territory flood-fill, no komi. It is a proxy for the live standing of
/// the game, not tournament-accurate Go scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub captured_black: u16,
    pub captured_white: u16,
    pub black_stones: u16,
    pub white_stones: u16,
    pub black_points: u16,
    pub white_points: u16,
    pub ended: bool,
}

/// Game outcome under stones-plus-prisoners counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    BlackWins,
    WhiteWins,
    Tie,
}

/// Stones of `color` on the board plus opponent stones taken prisoner
pub fn points(state: &GameState, color: Color) -> u16 {
    let own_stones = state.board.count(color) as u16;
    let prisoners = match color {
        Color::Black => state.captured_white,
        Color::White => state.captured_black,
    };
    own_stones + prisoners
}

pub fn score(state: &GameState) -> ScoreSummary {
    ScoreSummary {
        captured_black: state.captured_black,
        captured_white: state.captured_white,
        black_stones: state.board.count(Color::Black) as u16,
        white_stones: state.board.count(Color::White) as u16,
        black_points: points(state, Color::Black),
        white_points: points(state, Color::White),
        ended: state.ended,
    }
}

/// Total over every input: equal points is a tie
pub fn winner(state: &GameState) -> Winner {
    let black = points(state, Color::Black);
    let white = points(state, Color::White);

    match black.cmp(&white) {
        std::cmp::Ordering::Greater => Winner::BlackWins,
        std::cmp::Ordering::Less => Winner::WhiteWins,
        std::cmp::Ordering::Equal => Winner::Tie,
    }
}
