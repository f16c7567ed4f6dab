// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use goban_core::{Color, Coord, GameState};

/// Render the game board as ASCII art
pub fn render_board(game_state: &GameState) -> String {
    let size = game_state.board_size;
    let mut output = String::new();

    // Add column labels
    output.push_str("   ");
    for col in 0..size {
        let col_char = coord_to_column_char(col);
        output.push_str(&format!(" {}", col_char));
    }
    output.push('\n');

    // Add rows with row numbers and board content
    for row in 0..size {
        // Row number (1-indexed)
        output.push_str(&format!("{:2} ", row + 1));

        for col in 0..size {
            let coord = Coord::new(col, row);
            let symbol = match game_state.board.get(coord) {
                Some(Color::Black) => "●",
                Some(Color::White) => "○",
                None => {
                    if is_star_point(coord, size) {
                        "+"
                    } else {
                        "·"
                    }
                }
            };

            output.push_str(&format!(" {}", symbol));
        }

        output.push('\n');
    }

    output
}

/// Convert a column index to a column character (A-T, skipping I)
fn coord_to_column_char(col: u8) -> char {
    if col < 8 {
        (b'A' + col) as char
    } else {
        (b'A' + col + 1) as char // Skip 'I'
    }
}

/// Check if a coordinate is a star point on the board
fn is_star_point(coord: Coord, board_size: u8) -> bool {
    let (x, y) = (coord.x, coord.y);

    match board_size {
        9 => {
            matches!((x, y), (2, 2) | (2, 6) | (4, 4) | (6, 2) | (6, 6))
        }
        13 => {
            matches!((x, y), (3, 3) | (3, 9) | (6, 6) | (9, 3) | (9, 9))
        }
        19 => {
            matches!(
                (x, y),
                (3, 3) | (3, 9) | (3, 15) | (9, 3) | (9, 9) | (9, 15) | (15, 3) | (15, 9) | (15, 15)
            )
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stones_and_star_points_show_up() {
        let mut game = GameState::new(9);
        game.place_stone(0, 0).unwrap(); // Black
        game.place_stone(0, 1).unwrap(); // White

        let rendered = render_board(&game);
        assert!(rendered.contains('●'));
        assert!(rendered.contains('○'));
        assert!(rendered.contains('+')); // untouched star point
    }

    #[test]
    fn column_labels_skip_i() {
        assert_eq!(coord_to_column_char(7), 'H');
        assert_eq!(coord_to_column_char(8), 'J');
    }
}
