//! Interactive console front-end for the tic-tac-toe engine.
//!
//! Reads moves from stdin and renders the board and game events to
//! stdout. All game state lives in the engine; this binary only
//! forwards coordinates and prints what it is told.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead};
use tictactoe_engine::{Game, GameEvent, Phase};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "play")]
#[command(about = "Console tic-tac-toe", long_about = None)]
#[command(version)]
struct Cli {
    /// Emit game events as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut game = Game::new();
    if cli.json {
        game.subscribe(|event| match serde_json::to_string(event) {
            Ok(line) => println!("{line}"),
            Err(error) => eprintln!("failed to encode event: {error}"),
        });
    } else {
        game.subscribe(|event| match event {
            GameEvent::Moved { x, y, player } => println!("{player} played ({x}, {y})"),
            GameEvent::TurnChanged { next } => println!("{next} to move"),
            GameEvent::Completed { outcome } => println!("{outcome}"),
            GameEvent::Reset => println!("New game"),
        });
    }

    info!("starting console game");
    println!("{}", game.board());
    println!(
        "{} to move - enter `x y` (0-2), `reset`, or `quit`",
        game.current_turn()
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" | "q" => break,
            "reset" => game.reset(),
            input => match parse_coordinates(input) {
                Some((x, y)) => {
                    if !game.request_move(x, y) {
                        println!("Illegal move - try one of {:?}", game.board().empty_cells());
                        continue;
                    }
                }
                None => {
                    println!("Enter a move as `x y`, e.g. `0 2`");
                    continue;
                }
            },
        }

        println!("{}", game.board());
        if game.phase() == Phase::Complete {
            println!("Game over - `reset` to play again, `quit` to exit");
        }
    }

    Ok(())
}

fn parse_coordinates(input: &str) -> Option<(u8, u8)> {
    let mut parts = input.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::parse_coordinates;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_coordinates("0 2"), Some((0, 2)));
        assert_eq!(parse_coordinates("  1   1 "), Some((1, 1)));
        assert_eq!(parse_coordinates("1"), None);
        assert_eq!(parse_coordinates("1 2 3"), None);
        assert_eq!(parse_coordinates("a b"), None);
    }
}
