//! API handlers for the tournament catalog.

pub mod catalog;
pub mod export;
pub mod landing;
pub mod tournaments;
