//! # League Tracker
//!
//! A local league standings tracker with a server-rendered dashboard.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (match records, roster, standings)
//! - **calculate**: Pure standings computation from match records
//! - **datasource**: Match list loading (local file or HTTP)
//! - **render**: HTML rendering of the computed standings
//! - **api**: HTTP endpoints (dashboard page + JSON API)
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod datasource;
pub mod models;
pub mod render;

pub use models::*;
