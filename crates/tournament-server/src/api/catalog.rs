//! Sport and level listing handlers.
//!
//! Both lists come from the shared catalog, not from stored data.

use axum::Json;
use serde::Serialize;
use tournament_core::{LEVELS, SPORTS};

#[derive(Debug, Serialize)]
pub struct SportList {
    pub sports: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct LevelList {
    pub levels: &'static [&'static str],
}

/// `GET /api/sports`
pub async fn list_sports() -> Json<SportList> {
    Json(SportList { sports: &SPORTS })
}

/// `GET /api/levels`
pub async fn list_levels() -> Json<LevelList> {
    Json(LevelList { levels: &LEVELS })
}
