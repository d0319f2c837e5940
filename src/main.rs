//! Strictly Minimax - command-line front end
//!
//! Analyzes positions, lets the engine play itself, and replays a list of
//! human moves against the computer.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use strictly_minimax::{Board, GameOutcome, Mark, Match, MatchConfig, Minimax, SearchResult, play_out};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MatchConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => MatchConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Analyze { board, json } => run_analyze(board, json),
        Command::PlayOut { board, json } => run_play_out(board.unwrap_or_default(), json),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Report printed by `analyze`.
#[derive(Debug, Serialize)]
struct Analysis {
    board: Board,
    outcome: GameOutcome,
    to_move: Option<Mark>,
    search: SearchResult,
}

/// Score every move on `board` for the side to move
#[instrument(skip(board))]
fn run_analyze(board: Board, json: bool) -> Result<()> {
    let outcome = board.outcome();
    let to_move = (!outcome.is_terminal()).then(|| board.next_mark());
    let search = Minimax::for_board(&board).search(&board);
    let analysis = Analysis {
        board,
        outcome,
        to_move,
        search,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("{}", analysis.board);
    println!("Outcome: {}", analysis.outcome);
    if let Some(mark) = analysis.to_move {
        println!("{} to move", mark);
        for scored in analysis.search.root_scores() {
            println!("  cell {}: {:+}", scored.index, scored.score);
        }
    }
    match analysis.search.best_move() {
        Some(index) => println!("Best move: {}", index),
        None => println!("No move to make"),
    }
    Ok(())
}

/// Let the engine play both sides from `board`
#[instrument(skip(board))]
fn run_play_out(board: Board, json: bool) -> Result<()> {
    let result = play_out(&board)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for mov in &result.moves {
        println!("{}", mov);
    }
    println!("\n{}", result.board);
    println!("Outcome: {}", result.outcome);
    Ok(())
}

/// Play the human `moves` against the computer
#[instrument(skip(config))]
fn run_replay(config: &MatchConfig, moves: &[usize], json: bool) -> Result<()> {
    let mut game = Match::new(config);
    let opening = game.start()?;
    if let Some(index) = opening {
        info!(index, "Computer opened");
        if !json {
            println!("{} -> {}", game.computer(), index);
        }
    }

    let mut turns = Vec::with_capacity(moves.len());
    for (played, &index) in moves.iter().enumerate() {
        let turn = game
            .play(index)
            .with_context(|| format!("human move #{} at cell {}", played + 1, index))?;
        if !json {
            println!("{} -> {}", game.human(), turn.human);
            if let Some(reply) = turn.computer {
                println!("{} -> {}", game.computer(), reply);
            }
        }
        turns.push(turn);

        if turn.outcome.is_terminal() {
            let unplayed = moves.len() - played - 1;
            if unplayed > 0 {
                warn!(unplayed, "Game ended before all moves were played");
            }
            break;
        }
    }

    if json {
        #[derive(Serialize)]
        struct Replay<'a> {
            opening: Option<usize>,
            turns: &'a [strictly_minimax::Turn],
            board: &'a Board,
            outcome: GameOutcome,
        }
        let report = Replay {
            opening,
            turns: &turns,
            board: game.board(),
            outcome: game.outcome(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("\n{}", game.board());
    println!("Outcome: {}", game.outcome());
    Ok(())
}
