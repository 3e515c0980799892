//! Match data loading.
//!
//! Supplies the raw match list from a local JSON file or an HTTP URL.
//! Every failure collapses to the same user-facing condition: the data is
//! unavailable and the standings view is replaced with an error message.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::models::MatchRecord;

/// Request timeout for URL sources.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur while loading match data.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid match data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the match list comes from.
#[derive(Debug, Clone)]
pub enum MatchSource {
    /// JSON file on the local filesystem
    File(PathBuf),

    /// JSON document fetched over HTTP
    Url(Url),
}

impl MatchSource {
    /// Load and parse the full match list.
    ///
    /// The result is never cached; each call re-reads the source so the
    /// derived standings are always rebuilt from current data.
    pub async fn load(&self) -> Result<Vec<MatchRecord>, SourceError> {
        let matches: Vec<MatchRecord> = match self {
            MatchSource::File(path) => {
                debug!("Reading match data from {}", path.display());
                let contents =
                    tokio::fs::read_to_string(path)
                        .await
                        .map_err(|source| SourceError::Io {
                            path: path.clone(),
                            source,
                        })?;
                serde_json::from_str(&contents)?
            }
            MatchSource::Url(url) => {
                debug!("Fetching match data from {}", url);
                let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
                let response = client.get(url.clone()).send().await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(SourceError::HttpStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = response.text().await?;
                serde_json::from_str(&body)?
            }
        };

        let played = matches.iter().filter(|m| m.played).count();
        info!(
            "Loaded {} matches ({} played, {} upcoming)",
            matches.len(),
            played,
            matches.len() - played,
        );
        Ok(matches)
    }
}

impl std::fmt::Display for MatchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchSource::File(path) => write!(f, "{}", path.display()),
            MatchSource::Url(url) => write!(f, "{}", url),
        }
    }
}
