//! Cyclic Game console front-end
//!
//! Publishes the computer's HMAC, reads the player's move, then reveals the
//! key so the player can check the computer did not change its mind.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use cyclic_game_core::{help_table, verify_hex, GameError, MoveSet, Selection, Session};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE_EXAMPLE: &str = "Example: cyclic-game rock paper scissors";

#[derive(Parser)]
#[command(
    name = "cyclic-game",
    version,
    about = "Provably fair rock-paper-scissors for any odd number of moves",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Moves in circular order: each loses to the next half and beats the previous half
    moves: Vec<String>,

    /// Print the commitment and the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Play one round
    Play {
        moves: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the help table and exit
    Table { moves: Vec<String> },
    /// Check a revealed key against a published HMAC
    Verify {
        /// Revealed key, hex
        #[arg(long)]
        key: String,
        /// Published HMAC, hex
        #[arg(long)]
        hmac: String,
        /// Move the computer claims to have played
        #[arg(value_name = "MOVE")]
        label: String,
    },
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli.command {
        Some(Command::Play { moves, json }) => play(&moves, json, stdin.lock(), stdout.lock()),
        Some(Command::Table { moves }) => {
            let moves = validate(&moves)?;
            writeln!(stdout.lock(), "{}", help_table(&moves))?;
            Ok(())
        }
        Some(Command::Verify { key, hmac, label }) => {
            if verify_hex(&key, &label, &hmac)? {
                writeln!(stdout.lock(), "HMAC matches: the computer played {}", label)?;
                Ok(())
            } else {
                bail!("HMAC does not match {}", label)
            }
        }
        None => play(&cli.moves, cli.json, stdin.lock(), stdout.lock()),
    }
}

fn validate(args: &[String]) -> anyhow::Result<MoveSet> {
    MoveSet::new(args.iter().cloned()).map_err(|err| {
        let hint = match err {
            GameError::InvalidMoveCount { .. } => {
                "Please provide an odd number (at least 3) of unique moves."
            }
            GameError::DuplicateMove(_) => "Moves must be unique.",
            _ => "",
        };
        anyhow::anyhow!("{}\n{}\n{}", err, hint, USAGE_EXAMPLE)
    })
}

/// One session: publish the HMAC, prompt until a move or exit, then reveal
fn play<R: BufRead, W: Write>(args: &[String], json: bool, input: R, mut out: W) -> anyhow::Result<()> {
    let moves = validate(args)?;
    let session = Session::random(moves)?;
    info!(game_id = %session.id(), "new session");

    if json {
        writeln!(out, "{}", serde_json::to_string(&session.commit_message())?)?;
    } else {
        writeln!(out, "HMAC: {}", session.hmac())?;
    }
    writeln!(out, "{}", session.moves().menu())?;

    let mut lines = input.lines();
    loop {
        write!(out, "Enter your move: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let selection = Selection::parse(&line?, session.moves());

        match selection {
            Selection::Move(_) => {
                let report = session.play_selection(&selection)?;
                if json {
                    writeln!(out, "{}", serde_json::to_string(&report)?)?;
                } else {
                    for line in report.lines() {
                        writeln!(out, "{}", line)?;
                    }
                }
                return Ok(());
            }
            Selection::Help => writeln!(out, "{}", help_table(session.moves()))?,
            Selection::Exit => return Ok(()),
            Selection::Invalid(_) => {
                writeln!(out, "Invalid move. Please try again.")?;
                writeln!(out, "{}", session.moves().menu())?;
            }
        }
    }
}
