//! # Twenty48 Main Entry Point
//!
//! Deals a board and plays it from the terminal, either interactively or from
//! a move script.

use clap::Parser;
use log::{error, info};
use std::io::{self, BufRead, Write};
use twenty48::{
    parse_moves, render_json, GameState, GenerationConfig, InputHandler, PlayerInput,
    TextRenderer, TurnOutcome, Twenty48Result,
};

/// Command line arguments for the Twenty48 puzzle.
#[derive(Parser, Debug)]
#[command(name = "twenty48")]
#[command(about = "Sliding-tile 2048 puzzle in the terminal")]
#[command(version)]
struct Args {
    /// Random seed for tile spawning
    #[arg(short, long)]
    seed: Option<u64>,

    /// Play a move script (e.g. "LLURD") instead of reading from stdin
    #[arg(short, long)]
    moves: Option<String>,

    /// Print board snapshots as JSON
    #[arg(long)]
    json: bool,

    /// Disable Vi-style movement keys (hjkl)
    #[arg(long)]
    no_vi_keys: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

const HELP: &str = "w/a/s/d, arrows by name or h/j/k/l move; n = new game; q = quit";

fn main() {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    info!("Starting Twenty48 v{}", twenty48::VERSION);

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) {
    #[cfg(feature = "dev-tools")]
    {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(log_level))
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new()
            .parse_filters(log_level)
            .format_target(false)
            .init();
    }
}

fn run(args: &Args) -> Twenty48Result<()> {
    let config = GenerationConfig::new(args.seed);
    let mut game = GameState::new(&config)?;

    match &args.moves {
        Some(script) => run_script(&mut game, script, args.json),
        None => run_interactive(&mut game, args),
    }
}

/// Plays every move of `script`, then prints the final board.
fn run_script(game: &mut GameState, script: &str, json: bool) -> Twenty48Result<()> {
    let moves = parse_moves(script)?;
    info!("Playing {} scripted moves", moves.len());

    for mv in moves {
        if !game.has_moves() {
            info!("No moves left after turn {}", game.turn_number);
            break;
        }
        game.apply_move(mv)?;
    }

    print_board(game, json)
}

/// Reads one command per line from stdin until quit or end of input.
fn run_interactive(game: &mut GameState, args: &Args) -> Twenty48Result<()> {
    let input_handler = InputHandler::with_vi_keys(!args.no_vi_keys);
    let stdin = io::stdin();

    println!("{}", HELP);
    print_board(game, args.json)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let Some(input) = input_handler.parse(&line) else {
            println!("{}", HELP);
            continue;
        };

        match input {
            PlayerInput::Quit => {
                info!("Player quit the game");
                break;
            }
            PlayerInput::Help => {
                println!("{}", HELP);
                continue;
            }
            PlayerInput::NewGame => game.new_game()?,
            PlayerInput::Move(mv) => {
                if game.apply_move(mv)? == TurnOutcome::Unchanged {
                    println!("Nothing moved.");
                    continue;
                }
            }
        }

        print_board(game, args.json)?;
    }

    info!("Game loop ended after {} turns", game.turn_number);
    Ok(())
}

fn print_board(game: &GameState, json: bool) -> Twenty48Result<()> {
    let out = if json {
        render_json(game.board())?
    } else {
        TextRenderer::new().render(game.board())
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", out)?;
    stdout.flush()?;
    Ok(())
}
