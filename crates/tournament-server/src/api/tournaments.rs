//! Tournament listing handler.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tournament_core::Tournament;

use crate::error::ApiError;
use crate::repo::{TournamentFilter, TournamentRepo};
use crate::AppState;

/// Query parameters for listing tournaments.
#[derive(Debug, Default, Deserialize)]
pub struct ListTournamentsQuery {
    /// Exact sport name.
    pub sport: Option<String>,
    /// Exact level name.
    pub level: Option<String>,
}

impl From<ListTournamentsQuery> for TournamentFilter {
    fn from(query: ListTournamentsQuery) -> Self {
        Self {
            sport: query.sport,
            level: query.level,
        }
    }
}

/// Body of `GET /api/tournaments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentList {
    /// Always `"success"`.
    pub status: String,
    /// Number of entries in `tournaments`.
    pub count: usize,
    pub tournaments: Vec<Tournament>,
}

/// List tournaments, optionally filtered by sport and/or level.
///
/// # Endpoint
///
/// `GET /api/tournaments`
///
/// # Query Parameters
///
/// - `sport`: exact sport name (optional)
/// - `level`: exact level name (optional)
///
/// Unknown parameters are ignored, and a query string that cannot be parsed
/// is treated as no filter.
///
/// # Response
///
/// - `200 OK`: `{status, count, tournaments}` ordered by start date
/// - `500 Internal Server Error`: Database error
pub async fn list_tournaments(
    State(state): State<AppState>,
    query: Option<Query<ListTournamentsQuery>>,
) -> Result<Json<TournamentList>, ApiError> {
    let filter: TournamentFilter = query.map(|Query(q)| q).unwrap_or_default().into();
    let tournaments = TournamentRepo::new(state.db.clone()).filter(&filter)?;

    Ok(Json(TournamentList {
        status: "success".to_string(),
        count: tournaments.len(),
        tournaments,
    }))
}
