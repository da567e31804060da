use crate::domain::model::{Match, MatchId, SummaryRow};
use crate::domain::ports::{Clock, SystemClock};
use crate::utils::error::{Result, ScoreboardError};
use crate::utils::validation::{validate_index, validate_score, validate_team_name};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// In-memory board of the matches currently in play.
///
/// Matches are kept in insertion order and can be addressed either by
/// position (which shifts when an earlier match finishes) or by the
/// [`MatchId`] handed out when the match was started.
#[derive(Debug)]
pub struct Scoreboard<C: Clock = SystemClock> {
    matches: Vec<Match>,
    clock: C,
    next_id: u64,
}

impl Scoreboard<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Scoreboard<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Scoreboard<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            matches: Vec::new(),
            clock,
            next_id: 1,
        }
    }

    /// Starts a 0-0 match timestamped with the board's clock.
    pub fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<Match> {
        let start_time = self.clock.now();
        self.start_match_at(home_team, away_team, start_time)
    }

    pub fn start_match_at(
        &mut self,
        home_team: &str,
        away_team: &str,
        start_time: DateTime<Utc>,
    ) -> Result<Match> {
        validate_team_name("home_team", home_team)?;
        validate_team_name("away_team", away_team)?;

        let id = MatchId::new(self.next_id);
        self.next_id += 1;

        let new_match = Match::new(id, home_team.to_string(), away_team.to_string(), start_time);
        self.matches.push(new_match.clone());

        tracing::debug!(
            match_id = id.get(),
            home_team,
            away_team,
            %start_time,
            "match started"
        );
        Ok(new_match)
    }

    /// Overwrites both scores of the match at `index`.
    ///
    /// The index is checked before the scores, so an out-of-range index
    /// with a negative score reports `IndexOutOfRange`.
    pub fn update_score(&mut self, index: i64, home_score: i64, away_score: i64) -> Result<Match> {
        let position = validate_index(index, self.matches.len())?;
        self.apply_score(position, home_score, away_score)
    }

    pub fn update_score_by_id(
        &mut self,
        id: MatchId,
        home_score: i64,
        away_score: i64,
    ) -> Result<Match> {
        let position = self.require_position(id)?;
        self.apply_score(position, home_score, away_score)
    }

    /// Removes the match at `index`; later matches move down one position.
    pub fn finish_match(&mut self, index: i64) -> Result<Match> {
        let position = validate_index(index, self.matches.len())?;
        Ok(self.remove_at(position))
    }

    pub fn finish_match_by_id(&mut self, id: MatchId) -> Result<Match> {
        let position = self.require_position(id)?;
        Ok(self.remove_at(position))
    }

    /// Ranks matches by total score, most recently started first on ties.
    ///
    /// Matches with equal totals and equal start times keep insertion order.
    pub fn get_summary(&self) -> Vec<SummaryRow> {
        let mut ranked: Vec<&Match> = self.matches.iter().collect();
        ranked.sort_by(|a, b| summary_order(a, b));
        ranked.into_iter().map(Match::summary_row).collect()
    }

    /// Numbered text lines, e.g. `1. Uruguay 6 - Italy 6`.
    pub fn render_summary(&self) -> Vec<String> {
        self.get_summary()
            .iter()
            .enumerate()
            .map(|(i, row)| format!("{}. {}", i + 1, row))
            .collect()
    }

    /// Current time according to the board's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Match> {
        self.matches.get(index)
    }

    pub fn get_by_id(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn position_of(&self, id: MatchId) -> Option<usize> {
        self.matches.iter().position(|m| m.id == id)
    }

    /// Active matches in insertion order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    fn require_position(&self, id: MatchId) -> Result<usize> {
        self.position_of(id)
            .ok_or(ScoreboardError::MatchNotFound { id })
    }

    fn apply_score(&mut self, position: usize, home_score: i64, away_score: i64) -> Result<Match> {
        // Both scores are validated before either is written.
        let home_score = validate_score("home_score", home_score)?;
        let away_score = validate_score("away_score", away_score)?;

        let entry = &mut self.matches[position];
        entry.home_score = home_score;
        entry.away_score = away_score;

        tracing::debug!(
            match_id = entry.id.get(),
            position,
            home_score,
            away_score,
            "score updated"
        );
        Ok(entry.clone())
    }

    fn remove_at(&mut self, position: usize) -> Match {
        let finished = self.matches.remove(position);
        tracing::debug!(
            match_id = finished.id.get(),
            position,
            remaining = self.matches.len(),
            "match finished"
        );
        finished
    }
}

impl<'a, C: Clock> IntoIterator for &'a Scoreboard<C> {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

fn summary_order(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.start_time.cmp(&a.start_time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedClock;
    use chrono::{Duration, TimeZone};

    fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 11, 18, 0, 0).unwrap()
    }

    fn board_with_three() -> Scoreboard<FixedClock> {
        let mut board = Scoreboard::with_clock(FixedClock(kickoff()));
        let now = kickoff();
        board
            .start_match_at("Mexico", "Canada", now - Duration::minutes(30))
            .unwrap();
        board
            .start_match_at("Spain", "Brazil", now - Duration::minutes(20))
            .unwrap();
        board
            .start_match_at("Germany", "France", now - Duration::minutes(10))
            .unwrap();
        board
    }

    #[test]
    fn test_start_match_uses_clock() {
        let mut board = Scoreboard::with_clock(FixedClock(kickoff()));
        let m = board.start_match("Uruguay", "Italy").unwrap();

        assert_eq!(m.start_time, kickoff());
        assert_eq!(m.home_team, "Uruguay");
        assert_eq!(m.away_team, "Italy");
        assert_eq!((m.home_score, m.away_score), (0, 0));
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_start_match_rejects_empty_names() {
        let mut board = board_with_three();

        assert!(board.start_match("", "Canada").unwrap_err().is_invalid_argument());
        assert!(board.start_match("Canada", "").unwrap_err().is_invalid_argument());
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_ids_are_unique_and_not_reused() {
        let mut board = board_with_three();
        let last = board.matches()[2].id;

        board.finish_match(2).unwrap();
        let next = board.start_match("Uruguay", "Italy").unwrap();

        assert_ne!(next.id, last);
        assert!(next.id > last);
    }

    #[test]
    fn test_update_score_checks_index_before_scores() {
        let mut board = board_with_three();
        let err = board.update_score(99, -1, 0).unwrap_err();
        assert!(err.is_index_out_of_range());
    }

    #[test]
    fn test_update_score_is_all_or_nothing() {
        let mut board = board_with_three();
        board.update_score(0, 1, 1).unwrap();

        assert!(board.update_score(0, 4, -2).is_err());
        let m = board.get(0).unwrap();
        assert_eq!((m.home_score, m.away_score), (1, 1));
    }

    #[test]
    fn test_update_keeps_names_and_start_time() {
        let mut board = board_with_three();
        let before = board.get(1).unwrap().clone();

        let after = board.update_score(1, 10, 2).unwrap();

        assert_eq!(after.home_team, before.home_team);
        assert_eq!(after.away_team, before.away_team);
        assert_eq!(after.start_time, before.start_time);
        assert_eq!(after.id, before.id);
    }

    #[test]
    fn test_summary_does_not_reorder_board() {
        let mut board = board_with_three();
        board.update_score(2, 5, 5).unwrap();

        let order_before: Vec<MatchId> = board.iter().map(|m| m.id).collect();
        let summary = board.get_summary();
        let order_after: Vec<MatchId> = board.iter().map(|m| m.id).collect();

        assert_eq!(summary[0].home_team, "Germany");
        assert_eq!(order_before, order_after);
    }

    #[test]
    fn test_summary_keeps_insertion_order_on_full_tie() {
        let mut board = Scoreboard::with_clock(FixedClock(kickoff()));
        board.start_match("A", "B").unwrap();
        board.start_match("C", "D").unwrap();
        board.start_match("E", "F").unwrap();

        let homes: Vec<String> = board
            .get_summary()
            .into_iter()
            .map(|row| row.home_team)
            .collect();
        assert_eq!(homes, vec!["A", "C", "E"]);
    }

    #[test]
    fn test_render_summary() {
        let mut board = board_with_three();
        board.update_score(1, 10, 2).unwrap();

        let lines = board.render_summary();
        assert_eq!(lines[0], "1. Spain 10 - Brazil 2");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_board() {
        let mut board = Scoreboard::new();
        assert!(board.is_empty());
        assert!(board.get_summary().is_empty());
        assert!(board.finish_match(0).unwrap_err().is_index_out_of_range());
    }
}
