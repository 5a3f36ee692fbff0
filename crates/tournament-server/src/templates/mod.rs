//! HTML templates.

pub mod landing;

pub use landing::{FilterOption, LandingTemplate, TournamentCard};
