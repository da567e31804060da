use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle for a match. Unlike positional indices it survives the
/// removal of other matches, and is never reused by the same board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(u64);

impl MatchId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub start_time: DateTime<Utc>,
}

impl Match {
    pub(crate) fn new(
        id: MatchId,
        home_team: String,
        away_team: String,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
            start_time,
        }
    }

    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    pub fn summary_row(&self) -> SummaryRow {
        SummaryRow {
            home_team: self.home_team.clone(),
            home_score: self.home_score,
            away_score: self.away_score,
            away_team: self.away_team.clone(),
        }
    }
}

/// One line of the ranked summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub home_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub away_team: String,
}

impl SummaryRow {
    pub fn new(home_team: &str, home_score: u32, away_score: u32, away_team: &str) -> Self {
        Self {
            home_team: home_team.to_string(),
            home_score,
            away_score,
            away_team: away_team.to_string(),
        }
    }
}

impl fmt::Display for SummaryRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_starts_nil_nil() {
        let m = Match::new(
            MatchId::new(1),
            "Mexico".to_string(),
            "Canada".to_string(),
            Utc::now(),
        );
        assert_eq!(m.home_score, 0);
        assert_eq!(m.away_score, 0);
        assert_eq!(m.total_score(), 0);
    }

    #[test]
    fn test_total_score_does_not_overflow() {
        let mut m = Match::new(MatchId::new(1), "A".to_string(), "B".to_string(), Utc::now());
        m.home_score = u32::MAX;
        m.away_score = u32::MAX;
        assert_eq!(m.total_score(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_summary_row_display() {
        let row = SummaryRow::new("Uruguay", 6, 6, "Italy");
        assert_eq!(row.to_string(), "Uruguay 6 - Italy 6");
    }

    #[test]
    fn test_summary_row_serializes_flat() {
        let row = SummaryRow::new("Spain", 10, 2, "Brazil");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "home_team": "Spain",
                "home_score": 10,
                "away_score": 2,
                "away_team": "Brazil"
            })
        );
    }
}
