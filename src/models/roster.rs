//! League roster — the fixed list of known teams.

use serde::{Deserialize, Serialize};

/// Ordered list of the teams in the league.
///
/// Every roster team appears in the standings table even with zero matches
/// played. A team referenced by a match but absent from the roster is
/// silently ignored by the calculator; that is the safety policy, not an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<String>);

impl Roster {
    pub fn new(teams: Vec<String>) -> Self {
        Self(teams)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|t| t == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for Roster {
    fn from(teams: Vec<String>) -> Self {
        Self(teams)
    }
}

impl From<&[&str]> for Roster {
    fn from(teams: &[&str]) -> Self {
        Self(teams.iter().map(|t| t.to_string()).collect())
    }
}
