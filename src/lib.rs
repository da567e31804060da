pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use core::scoreboard::Scoreboard;
pub use domain::model::{Match, MatchId, SummaryRow};
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use utils::error::{ErrorCategory, Result, ScoreboardError};
