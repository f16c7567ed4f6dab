// SPDX-License-Identifier: MIT OR Apache-2.0

//! Goban CLI - Command-line interface for playing Go in a terminal
//!
//! Human moves are entered as board coordinates ("D4"), passes as "pass".
//! The opponent is a random agent built on nothing but the engine's
//! legal-move listing.

mod render;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use goban_core::{engine, engine::MovePicker, scoring, Coord, GameState, Move, Winner};
use rand::prelude::*;
use std::io::{BufRead, Write};

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(name = "goban-cli", about = "Goban game command-line interface", version)]
struct Args {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Board size (9, 13, or 19)
    #[clap(short, long, default_value = "9")]
    size: u8,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play interactively against the random agent
    Play,
    /// Let two random agents play out a game
    Selfplay {
        /// Stop after this many moves even if the game is still open
        #[clap(long, default_value = "200")]
        max_moves: usize,
    },
}

/// Picks uniformly among the legal moves, passing when there are none
struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl MovePicker for RandomAgent {
    fn next_move(&mut self, state: &GameState) -> Move {
        let moves = engine::legal_moves(state);
        match moves.choose(&mut self.rng) {
            Some(&coord) => Move::Place(coord),
            None => Move::Pass,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // Validate board size
    if ![9, 13, 19].contains(&args.size) {
        return Err(anyhow!("Invalid board size. Must be 9, 13, or 19."));
    }

    match args.command {
        Some(Command::Selfplay { max_moves }) => selfplay(args.size, max_moves),
        Some(Command::Play) | None => play(args.size),
    }
}

/// Interactive game: human plays Black, the random agent plays White
fn play(size: u8) -> Result<()> {
    let mut game = GameState::new(size);
    let mut agent = RandomAgent::new();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", render::render_board(&game));

    loop {
        print!("Your move (e.g. 'D4', 'pass', 'quit'): ");
        std::io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        let mv = match parse_move(input, game.board_size) {
            Ok(mv) => mv,
            Err(e) => {
                eprintln!("Invalid move: {}", e);
                continue;
            }
        };

        if let Err(e) = game.apply_move(mv) {
            eprintln!("Rejected: {}", e);
            continue;
        }

        if !game.is_game_over() {
            let reply = agent.next_move(&game);
            match reply {
                Move::Place(coord) => println!(
                    "White plays {}{}",
                    column_char(coord.x),
                    coord.y + 1
                ),
                Move::Pass => println!("White passes"),
            }
            game.apply_move(reply)
                .map_err(|e| anyhow!("agent produced an illegal move: {}", e))?;
        }

        println!("\n{}", render::render_board(&game));

        if game.is_game_over() {
            break;
        }
    }

    print_result(&game);
    Ok(())
}

/// Two random agents play until the game ends or the move cap is reached
fn selfplay(size: u8, max_moves: usize) -> Result<()> {
    let mut game = GameState::new(size);
    let mut agent = RandomAgent::new();

    for _ in 0..max_moves {
        if game.is_game_over() {
            break;
        }
        let mv = agent.next_move(&game);
        game.apply_move(mv)
            .map_err(|e| anyhow!("agent produced an illegal move: {}", e))?;
    }

    println!("{}", render::render_board(&game));
    print_result(&game);
    Ok(())
}

fn print_result(game: &GameState) {
    let summary = scoring::score(game);
    println!(
        "Moves: {}  Captures: Black {} - White {}",
        game.moves.len(),
        summary.captured_black,
        summary.captured_white
    );
    println!(
        "Points: Black {} - White {}",
        summary.black_points, summary.white_points
    );

    if summary.ended {
        match scoring::winner(game) {
            Winner::BlackWins => println!("Black wins."),
            Winner::WhiteWins => println!("White wins."),
            Winner::Tie => println!("Tie."),
        }
    } else {
        println!("Game still open.");
    }
}

/// Parse a move from a string like "D4" or "pass"
fn parse_move(input: &str, board_size: u8) -> Result<Move> {
    let input = input.to_lowercase();

    if input == "pass" {
        return Ok(Move::Pass);
    }

    // Parse coordinate like "D4"
    if input.is_ascii() && input.len() >= 2 {
        let col_char = input.chars().next().unwrap();
        let row_str = &input[1..];

        // Parse column (A-T, skipping I)
        let col = if ('a'..='h').contains(&col_char) {
            col_char as u8 - b'a'
        } else if ('j'..='t').contains(&col_char) {
            col_char as u8 - b'a' - 1 // Skip 'i'
        } else {
            return Err(anyhow!("Invalid column. Must be A-T (excluding I)."));
        };

        // Parse row (1-based)
        let row = match row_str.parse::<u8>() {
            Ok(r) if r > 0 && r <= board_size => r - 1, // Convert to 0-indexed
            _ => {
                return Err(anyhow!(
                    "Invalid row. Must be between 1 and {}.",
                    board_size
                ))
            }
        };

        if col < board_size {
            return Ok(Move::Place(Coord::new(col, row)));
        }
    }

    Err(anyhow!("Invalid move format. Examples: 'D4', 'pass'."))
}

/// Column letter for display (A-T, skipping I)
fn column_char(col: u8) -> char {
    if col < 8 {
        (b'A' + col) as char
    } else {
        (b'A' + col + 1) as char
    }
}
