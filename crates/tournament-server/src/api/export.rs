//! Export API handlers.
//!
//! Exports are written server-side into the configured output directory; the
//! response only acknowledges the write.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::export::{self, CSV_FILE, JSON_FILE};
use crate::repo::TournamentRepo;
use crate::AppState;

/// Acknowledgement returned by the export endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ExportStatus {
    pub status: String,
    pub message: String,
}

impl ExportStatus {
    fn success(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }
}

/// Export all tournaments to `<output_dir>/tournaments.csv`.
///
/// # Endpoint
///
/// `GET /api/export/csv`
///
/// # Response
///
/// - `200 OK`: `{status, message}`
/// - `500 Internal Server Error`: Database or file error
pub async fn export_csv(State(state): State<AppState>) -> Result<Json<ExportStatus>, ApiError> {
    let tournaments = TournamentRepo::new(state.db.clone()).list_all()?;
    let path = state.output_dir.join(CSV_FILE);

    export::write_csv(&path, &tournaments)?;
    tracing::info!(path = %path.display(), rows = tournaments.len(), "Exported CSV");

    Ok(Json(ExportStatus::success("CSV exported successfully")))
}

/// Export all tournaments to `<output_dir>/tournaments.json`.
///
/// # Endpoint
///
/// `GET /api/export/json`
///
/// # Response
///
/// - `200 OK`: `{status, message}`
/// - `500 Internal Server Error`: Database or file error
pub async fn export_json(State(state): State<AppState>) -> Result<Json<ExportStatus>, ApiError> {
    let tournaments = TournamentRepo::new(state.db.clone()).list_all()?;
    let path = state.output_dir.join(JSON_FILE);

    export::write_json(&path, &tournaments)?;
    tracing::info!(path = %path.display(), rows = tournaments.len(), "Exported JSON");

    Ok(Json(ExportStatus::success("JSON exported successfully")))
}
