//! Landing page handler.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use tournament_core::{LEVELS, SPORTS};

use crate::api::tournaments::ListTournamentsQuery;
use crate::error::ApiError;
use crate::repo::{TournamentFilter, TournamentRepo};
use crate::templates::{FilterOption, LandingTemplate, TournamentCard};
use crate::AppState;

/// Render the catalog page, honouring the same filters as `/api/tournaments`.
///
/// # Endpoint
///
/// `GET /`
pub async fn index(
    State(state): State<AppState>,
    query: Option<Query<ListTournamentsQuery>>,
) -> Result<Html<String>, ApiError> {
    let filter: TournamentFilter = query.map(|Query(q)| q).unwrap_or_default().into();
    let tournaments = TournamentRepo::new(state.db.clone()).filter(&filter)?;

    let template = LandingTemplate {
        sports: FilterOption::list(&SPORTS, filter.sport.as_deref()),
        levels: FilterOption::list(&LEVELS, filter.level.as_deref()),
        tournaments: tournaments.into_iter().map(TournamentCard::from).collect(),
    };

    Ok(Html(template.render()?))
}
