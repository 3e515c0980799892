use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;

use crate::api::state::AppState;
use crate::calculate::compute_standings;
use crate::render::{render_error_page, render_page};

/// The server-rendered dashboard.
///
/// On a data-load failure the main content is replaced with a visible
/// error message; no partial table is rendered.
pub async fn dashboard(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    match state.source.load().await {
        Ok(matches) => {
            let standings = compute_standings(&state.roster, &matches);
            (StatusCode::OK, Html(render_page(&standings)))
        }
        Err(e) => {
            tracing::error!("Failed to load match data from {}: {}", state.source, e);
            let message = format!(
                "Could not load match data from {}. Please check that the source exists.",
                state.source
            );
            (StatusCode::BAD_GATEWAY, Html(render_error_page(&message)))
        }
    }
}
