//! Core data models for the league tracker.

mod match_record;
mod roster;
mod standings;

pub use match_record::*;
pub use roster::*;
pub use standings::*;
