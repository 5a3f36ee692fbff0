//! Core types for the tournament catalog.
//!
//! This crate has no I/O. It provides:
//! - [`catalog`]: the fixed sport and level tables
//! - [`NewTournament`] and [`Tournament`] records
//! - [`validate`] / [`check`] for structural validation before insertion
//! - [`generate`] and [`SampleCatalog`] for sample data

pub mod catalog;
mod generator;
mod tournament;
mod validate;

pub use catalog::{is_level, is_sport, LEVELS, SPORTS};
pub use generator::{generate, SampleCatalog, TournamentSource};
pub use tournament::{NewTournament, Tournament};
pub use validate::{check, validate, ValidationError, DATE_FORMAT};
