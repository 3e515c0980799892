//! Derived standings models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::MatchRecord;

/// Outcome of one completed match from a single team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MatchOutcome {
    Won,
    Lost,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Won => write!(f, "WON"),
            MatchOutcome::Lost => write!(f, "LOST"),
        }
    }
}

/// One completed match in a team's history, in match-array order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Id of the match this entry came from
    pub match_id: u32,

    /// Opposing team
    pub opponent: String,

    /// Sets won by this team
    pub score_own: u32,

    /// Sets won by the opponent
    pub score_opp: u32,

    /// Result from this team's perspective
    pub outcome: MatchOutcome,
}

/// Per-team aggregate statistics, rebuilt from scratch on every computation.
///
/// Invariants: `matches == won + lost` and `points == 2 * won` (a win is
/// worth 2 points, a loss 0; draws are not modeled).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Team name
    pub name: String,

    /// Matches played
    pub matches: u32,

    /// Matches won
    pub won: u32,

    /// Matches lost
    pub lost: u32,

    /// League points (2 per win)
    pub points: u32,

    /// Sets won across all matches
    pub sets_for: u32,

    /// Sets conceded across all matches
    pub sets_against: u32,

    /// Completed matches involving this team, in input order
    pub history: Vec<HistoryEntry>,
}

impl TeamStats {
    /// Zeroed stats for a team that has not played yet.
    pub fn zeroed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matches: 0,
            won: 0,
            lost: 0,
            points: 0,
            sets_for: 0,
            sets_against: 0,
            history: Vec::new(),
        }
    }

    /// Set differential, the ranking tie-break.
    pub fn set_difference(&self) -> i64 {
        i64::from(self.sets_for) - i64::from(self.sets_against)
    }

    /// Set differential formatted for display: `+N` when positive,
    /// plain otherwise.
    pub fn signed_difference(&self) -> String {
        let diff = self.set_difference();
        if diff > 0 {
            format!("+{}", diff)
        } else {
            diff.to_string()
        }
    }
}

/// Full output of one standings computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standings {
    /// When these standings were computed
    pub computed_at: DateTime<Utc>,

    /// Teams in ranked order
    pub teams: Vec<TeamStats>,

    /// Completed matches, in input order
    pub results: Vec<MatchRecord>,

    /// Scheduled matches, in input order
    pub upcoming: Vec<MatchRecord>,
}

impl Standings {
    pub fn new(teams: Vec<TeamStats>, results: Vec<MatchRecord>, upcoming: Vec<MatchRecord>) -> Self {
        Self {
            computed_at: Utc::now(),
            teams,
            results,
            upcoming,
        }
    }

    /// Look up a team's stats by name.
    pub fn team(&self, name: &str) -> Option<&TeamStats> {
        self.teams.iter().find(|t| t.name == name)
    }
}
