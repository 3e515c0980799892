use std::sync::Arc;

use crate::config::{AppConfig, ConfigError};
use crate::datasource::MatchSource;
use crate::models::Roster;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub source: MatchSource,
    pub roster: Roster,
}

impl AppState {
    /// Resolve the configured source and roster up front so request
    /// handlers never deal with configuration errors.
    pub fn new(config: AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = config.match_source()?;
        let roster = config.roster();
        Ok(Self {
            config: Arc::new(config),
            source,
            roster,
        })
    }
}
