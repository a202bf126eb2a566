//! Tic-tac-toe - terminal front end
//!
//! Play against the minimax engine, analyse a position, or watch the
//! engine play itself.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufReader};
use tictactoe_cli::{
    Cli, Command, HumanPlayer, MinimaxPlayer, Orchestrator, PlayConfig, Player, init_tracing,
};
use tictactoe_minimax::{
    Board, Outcome, Player as Mark, action_values, best_action, current_player, outcome,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)?;
    init_tracing(config.log_filter());

    match cli.command {
        Command::Play { human, show_values } => {
            run_play(config.with_overrides(human, show_values))
        }
        Command::Solve { board } => run_solve(&board),
        Command::Selfplay { games } => run_selfplay(games),
    }
}

/// Plays one interactive game in the terminal.
#[instrument(skip_all)]
fn run_play(config: PlayConfig) -> Result<()> {
    let human = config.human().player();
    info!(?human, "Starting interactive game");

    let player_for = |mark: Mark| -> Box<dyn Player> {
        if human == Some(mark) {
            Box::new(HumanPlayer::new(
                "You",
                BufReader::new(io::stdin()),
                io::stdout(),
            ))
        } else {
            Box::new(MinimaxPlayer::new(format!("Engine {}", mark)))
        }
    };

    Orchestrator::new(player_for(Mark::X), player_for(Mark::O), io::stdout())
        .show_values(*config.show_values())
        .run()?;
    Ok(())
}

/// Prints an analysis of the given board.
#[instrument]
fn run_solve(text: &str) -> Result<()> {
    let board: Board = text
        .parse()
        .with_context(|| format!("could not parse board {:?}", text))?;

    println!("{}\n", board);
    if !board.is_reachable() {
        println!("warning: this board cannot arise from legal play");
    }

    match outcome(&board) {
        Some(result) => println!("Game over: {}", result),
        None => {
            if let Some(mark) = current_player(&board) {
                println!("To move: {}", mark);
            }
            for (action, value) in action_values(&board) {
                println!("  {:<14} {} {:+}", action.label(), action, value);
            }
            if let Some(action) = best_action(&board) {
                println!("Best move: {} {}", action.label(), action);
            }
        }
    }
    Ok(())
}

/// Plays the engine against itself and tallies the results.
#[instrument]
fn run_selfplay(games: u32) -> Result<()> {
    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);

    for game in 1..=games {
        let report = Orchestrator::new(
            Box::new(MinimaxPlayer::new("Engine X")),
            Box::new(MinimaxPlayer::new("Engine O")),
            io::sink(),
        )
        .run()?;

        match report.outcome {
            Some(Outcome::Winner(Mark::X)) => x_wins += 1,
            Some(Outcome::Winner(Mark::O)) => o_wins += 1,
            Some(Outcome::Draw) => draws += 1,
            None => {}
        }
        info!(game, outcome = ?report.outcome, "Self-play game finished");
        println!("{}\n", report.board);
    }

    println!("X wins: {}, O wins: {}, draws: {}", x_wins, o_wins, draws);
    Ok(())
}
