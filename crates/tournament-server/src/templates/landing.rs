//! Landing page template.
//!
//! Renders the catalog as a server-side page with sport and level selectors
//! that submit back to `/` as query parameters.

use askama::Template;
use tournament_core::Tournament;

/// An entry in a filter drop-down.
#[derive(Debug, Clone)]
pub struct FilterOption {
    pub value: &'static str,
    pub selected: bool,
}

impl FilterOption {
    /// Builds the option list for `values`, marking `current` as selected.
    pub fn list(values: &[&'static str], current: Option<&str>) -> Vec<Self> {
        values
            .iter()
            .map(|&value| Self {
                value,
                selected: current == Some(value),
            })
            .collect()
    }
}

/// A tournament prepared for display. Absent fields are empty strings.
#[derive(Debug, Clone)]
pub struct TournamentCard {
    pub name: String,
    pub sport: String,
    pub level: String,
    pub start_date: String,
    pub end_date: String,
    pub official_url: String,
    pub streaming: String,
    pub image_url: String,
    pub summary: String,
}

impl From<Tournament> for TournamentCard {
    fn from(t: Tournament) -> Self {
        Self {
            streaming: t.streaming_links.join(", "),
            name: t.name,
            sport: t.sport,
            level: t.level,
            start_date: t.start_date,
            end_date: t.end_date,
            official_url: t.official_url.unwrap_or_default(),
            image_url: t.image_url.unwrap_or_default(),
            summary: t.summary.unwrap_or_default(),
        }
    }
}

/// The catalog landing page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct LandingTemplate {
    pub sports: Vec<FilterOption>,
    pub levels: Vec<FilterOption>,
    pub tournaments: Vec<TournamentCard>,
}
