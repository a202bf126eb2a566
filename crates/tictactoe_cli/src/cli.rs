//! Command-line interface for the tic-tac-toe engine.

use crate::config::HumanSide;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play or analyse tic-tac-toe with exhaustive minimax", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Which mark the human plays (overrides the config file)
        #[arg(long, value_enum)]
        human: Option<HumanSide>,

        /// Print the minimax value of every legal move before each turn
        #[arg(long)]
        show_values: bool,
    },

    /// Analyse a board given as nine cells, e.g. "XO./.X./..O"
    Solve {
        /// Board in row-major order; `.` marks an empty square
        board: String,
    },

    /// Let the engine play itself
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}
