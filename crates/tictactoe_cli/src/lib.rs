//! Terminal front end for the tic-tac-toe minimax engine.
//!
//! Everything here is presentation: command line parsing, configuration,
//! logging setup and a game loop that threads a
//! [`Board`](tictactoe_minimax::Board) between two players.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod orchestrator;
mod players;

pub use cli::{Cli, Command};
pub use config::{ConfigError, HumanSide, PlayConfig};
pub use logging::init_tracing;
pub use orchestrator::{GameReport, Orchestrator};
pub use players::{HumanPlayer, MinimaxPlayer, Player, parse_action};
