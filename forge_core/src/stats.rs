//! Read-only statistics projections over progress and schedule.
//!
//! Nothing here is stored; every figure is recomputed from the
//! source-of-truth progress on each call.

use crate::{Progress, Schedule};

/// Per-day completion figures for charting
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayVolume {
    /// Short day label (first three characters of the day name)
    pub label: String,
    /// Exercises scheduled for the day
    pub total: usize,
    /// Exercises completed this week
    pub completed: usize,
}

impl DayVolume {
    /// Completion fraction in [0, 1]; rest days report 0
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

/// Total completed exercise count across all tracked days
pub fn total_completed(progress: &Progress) -> usize {
    progress.completed_exercises.values().map(Vec::len).sum()
}

/// Completed-days count over catalog day count, as a rounded percentage
pub fn completion_rate(schedule: &Schedule, progress: &Progress) -> u32 {
    if schedule.days.is_empty() {
        return 0;
    }
    let rate = progress.completed_days.len() as f64 / schedule.days.len() as f64;
    (rate * 100.0).round() as u32
}

/// Per-day volume rows in schedule order
pub fn day_volumes(schedule: &Schedule, progress: &Progress) -> Vec<DayVolume> {
    schedule
        .days
        .iter()
        .map(|day| DayVolume {
            label: day.day_name.chars().take(3).collect(),
            total: day.exercise_count(),
            completed: progress.completed_for(&day.id).len(),
        })
        .collect()
}
