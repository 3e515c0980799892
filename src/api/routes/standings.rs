use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::compute_standings;
use crate::models::{Roster, Standings};

/// Load the match list and compute fresh standings.
///
/// Shared by the JSON routes; the dashboard route does the same but renders
/// HTML. Every load failure is the one `DataUnavailable` condition.
pub async fn load_standings(state: &AppState) -> Result<Standings, ApiError> {
    let matches = state.source.load().await.map_err(|e| {
        tracing::error!("Failed to load match data from {}: {}", state.source, e);
        ApiError::DataUnavailable(e.to_string())
    })?;

    Ok(compute_standings(&state.roster, &matches))
}

pub async fn get_standings(State(state): State<AppState>) -> Result<Json<Standings>, ApiError> {
    let standings = load_standings(&state).await?;
    Ok(Json(standings))
}

pub async fn get_roster(State(state): State<AppState>) -> Json<Roster> {
    Json(state.roster.clone())
}
