use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::MatchRecord;

use super::standings::load_standings;

#[derive(Debug, Deserialize)]
pub struct MatchesParams {
    /// Optional filter: "played" or "upcoming"
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub results: Vec<MatchRecord>,
    pub upcoming: Vec<MatchRecord>,
    pub total: usize,
}

pub async fn get_matches(
    State(state): State<AppState>,
    Query(params): Query<MatchesParams>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let standings = load_standings(&state).await?;

    let (results, upcoming) = match params.status.as_deref() {
        None => (standings.results, standings.upcoming),
        Some("played") => (standings.results, Vec::new()),
        Some("upcoming") => (Vec::new(), standings.upcoming),
        Some(other) => {
            return Err(ApiError::BadRequest(format!(
                "Unknown status filter: {} (use 'played' or 'upcoming')",
                other
            )))
        }
    };

    let total = results.len() + upcoming.len();
    Ok(Json(MatchesResponse {
        results,
        upcoming,
        total,
    }))
}
