//! Match record model — one fixture as it appears in the data file.

use serde::{Deserialize, Serialize};

/// A single fixture between two teams.
///
/// `s1`/`s2` are set counts for `t1`/`t2` and are meaningful only when
/// `played` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier, used as the display label ("Match 3")
    pub id: u32,

    /// First team name
    pub t1: String,

    /// Second team name
    pub t2: String,

    /// Sets won by `t1`
    pub s1: u32,

    /// Sets won by `t2`
    pub s2: u32,

    /// Whether the match has been played
    pub played: bool,
}

impl MatchRecord {
    /// Create a completed match.
    pub fn played(id: u32, t1: impl Into<String>, t2: impl Into<String>, s1: u32, s2: u32) -> Self {
        Self {
            id,
            t1: t1.into(),
            t2: t2.into(),
            s1,
            s2,
            played: true,
        }
    }

    /// Create a scheduled match with no scores yet.
    pub fn scheduled(id: u32, t1: impl Into<String>, t2: impl Into<String>) -> Self {
        Self {
            id,
            t1: t1.into(),
            t2: t2.into(),
            s1: 0,
            s2: 0,
            played: false,
        }
    }

    /// Winning team of a completed match.
    ///
    /// Scores are strictly ordered in this domain; on equal scores `t2` is
    /// reported, mirroring the outcome rule in the standings calculation.
    pub fn winner(&self) -> Option<&str> {
        if !self.played {
            return None;
        }
        if self.s1 > self.s2 {
            Some(&self.t1)
        } else {
            Some(&self.t2)
        }
    }
}
