#![forbid(unsafe_code)]

//! Kronix, a personal productivity tracker.
//!
//! Daily missions, a habit check-in grid and a seven-day sleep chart,
//! served as JSON over HTTP from a single `SQLite` database.

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod persistence;
pub mod tracker;

pub use config::GlobalConfig;
pub use errors::{AppError, Result};
