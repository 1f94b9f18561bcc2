use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};

use mailbox_chess::board::{
    Color, FenError, GameStatus, Position, SearchParams, Searcher, DEFAULT_DEPTH,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Player {
    Human,
    Engine,
}

/// Play chess in the terminal against the negamax engine (or watch it play itself).
#[derive(Parser, Debug)]
#[command(name = "mailbox_chess", version)]
struct Args {
    /// Who plays White
    #[arg(long, value_enum, default_value_t = Player::Human)]
    white: Player,

    /// Who plays Black
    #[arg(long, value_enum, default_value_t = Player::Engine)]
    black: Player,

    /// Engine search depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Seed for the engine's tie-breaking shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Start from this FEN instead of the initial position
    #[arg(long)]
    fen: Option<String>,

    /// Stop after this many plies
    #[arg(long, default_value_t = 300)]
    max_plies: usize,
}

/// The position a game starts from, and returns to on `new`.
fn start_position(fen: Option<&str>) -> Result<Position, FenError> {
    match fen {
        Some(fen) => Position::from_fen(fen),
        None => Ok(Position::new()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut position = start_position(args.fen.as_deref())?;
    let mut searcher = Searcher::new(SearchParams {
        depth: args.depth,
        seed: args.seed,
        ..SearchParams::default()
    });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{position}");
        let moves = position.legal_moves();
        match position.status() {
            GameStatus::Checkmate { winner } => {
                println!("Checkmate. {winner} wins.");
                break;
            }
            GameStatus::Stalemate => {
                println!("Stalemate.");
                break;
            }
            GameStatus::Ongoing => {}
        }
        if position.move_log().len() >= args.max_plies {
            println!("Stopping after {} plies.", args.max_plies);
            break;
        }

        let side = position.side_to_move();
        let player = match side {
            Color::White => args.white,
            Color::Black => args.black,
        };
        let move_number = position.move_log().len() / 2 + 1;

        match player {
            Player::Engine => {
                let result = searcher.search(&mut position, &moves);
                let Some(mv) = result.best_move else { break };
                println!("{move_number}. {side} plays {mv} ({})", mv.coordinate_notation());
                position.apply_move(mv);
            }
            Player::Human => {
                print!("{move_number}. {side} to move (e.g. e2e4, undo, new, quit)> ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else { break };
                let line = line?;
                match line.trim() {
                    "quit" | "exit" => break,
                    "new" | "reset" => {
                        position = start_position(args.fen.as_deref())?;
                        println!("New game.");
                    }
                    "undo" => {
                        // Take back the engine's reply as well, if there was one.
                        position.undo_last_move();
                        let opponent = match side {
                            Color::White => args.black,
                            Color::Black => args.white,
                        };
                        if opponent == Player::Engine {
                            position.undo_last_move();
                        }
                    }
                    text => match position.parse_move(text) {
                        Ok(mv) => position.apply_move(mv),
                        Err(err) => println!("{err}"),
                    },
                }
            }
        }
    }

    Ok(())
}
