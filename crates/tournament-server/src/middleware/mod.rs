//! HTTP middleware.

pub mod timing;

pub use timing::request_timing;
