pub mod scoreboard;

pub use crate::domain::model::{Match, MatchId, SummaryRow};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
