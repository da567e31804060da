use crate::core::scoreboard::Scoreboard;
use crate::domain::ports::Clock;
use crate::utils::error::Result;
use chrono::Duration;

/// (home, away, home score, away score, minutes before now)
pub const WORLD_CUP_FIXTURE: [(&str, &str, i64, i64, i64); 5] = [
    ("Mexico", "Canada", 0, 5, 30),
    ("Spain", "Brazil", 10, 2, 20),
    ("Germany", "France", 2, 2, 10),
    ("Uruguay", "Italy", 6, 6, 5),
    ("Argentina", "Australia", 3, 1, 0),
];

/// Starts every fixture match relative to the board clock and applies its score.
pub fn load_world_cup<C: Clock>(board: &mut Scoreboard<C>) -> Result<()> {
    let now = board.now();
    for (home, away, home_score, away_score, minutes_ago) in WORLD_CUP_FIXTURE {
        let started = board.start_match_at(home, away, now - Duration::minutes(minutes_ago))?;
        board.update_score_by_id(started.id, home_score, away_score)?;
    }
    tracing::info!("📋 Loaded {} fixture matches", WORLD_CUP_FIXTURE.len());
    Ok(())
}
