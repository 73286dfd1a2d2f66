#![forbid(unsafe_code)]

//! Core domain model and business logic for the Forge workout tracker.
//!
//! This crate provides:
//! - Domain types (exercises, day routines, progress)
//! - The built-in weekly schedule catalog
//! - The progress reducer (completion, streaks, week rollover)
//! - Persistence (versioned JSON state file)
//! - Navigation/view controller
//! - Statistics projections

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod state;
pub mod reducer;
pub mod view;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_schedule, get_default_schedule};
pub use config::Config;
pub use reducer::{day_locked, resume_index};
pub use view::{App, Screen};
pub use stats::{completion_rate, day_volumes, total_completed, DayVolume};
