//! Repository modules for database operations.

pub mod tournaments;

pub use tournaments::{TournamentFilter, TournamentRepo};
