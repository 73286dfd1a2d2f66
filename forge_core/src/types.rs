//! Core domain types for the Forge workout tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and their properties
//! - Day routines and the weekly schedule
//! - The mutable progress record
//! - Outcome events emitted by the reducer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Catalog Types
// ============================================================================

/// How an exercise is measured
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
    RepBased,
    TimeBased,
    ToFailure,
}

/// A single exercise within a day routine (e.g., "Incline Push-up")
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    /// Target prescription, free text (e.g. "15 reps", "45 sec", "To failure")
    pub target: String,
    pub kind: ExerciseKind,
    pub category: String,
    pub instructions: Vec<String>,
    pub reference_url: Option<String>,
}

/// One day of the weekly schedule: a trained routine or a rest day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DayRoutine {
    pub id: String,
    pub day_name: String,
    pub focus: String,
    pub exercises: Vec<Exercise>,
    pub rest_day: bool,
}

impl DayRoutine {
    /// Number of exercises scheduled for this day
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }
}

/// The ordered weekly schedule of day routines
#[derive(Clone, Debug)]
pub struct Schedule {
    pub days: Vec<DayRoutine>,
}

impl Schedule {
    /// Look up a day routine by id
    pub fn day(&self, day_id: &str) -> Option<&DayRoutine> {
        self.days.iter().find(|d| d.id == day_id)
    }

    /// Position of a day id within the schedule order
    pub fn index_of(&self, day_id: &str) -> Option<usize> {
        self.days.iter().position(|d| d.id == day_id)
    }

    /// All day ids in schedule order
    pub fn day_ids(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|d| d.id.as_str())
    }
}

// ============================================================================
// Progress (the sole mutable entity)
// ============================================================================

/// The user's progress through the current week
///
/// Mutated only by the reducer methods and persisted after every change.
/// The per-day completed-exercise lists are ordered; a missing key means
/// "nothing completed yet" for that day.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    pub current_week: u32,
    pub completed_days: Vec<String>,
    pub completed_exercises: BTreeMap<String, Vec<String>>,
    pub streak: u32,
    pub last_workout_date: Option<NaiveDate>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            current_week: 1,
            completed_days: Vec::new(),
            completed_exercises: BTreeMap::new(),
            streak: 0,
            last_workout_date: None,
        }
    }
}

impl Progress {
    /// Completed exercise ids for a day, empty slice if none recorded
    pub fn completed_for(&self, day_id: &str) -> &[String] {
        self.completed_exercises
            .get(day_id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Whether a day id is present in the completed-days list
    pub fn day_completed(&self, day_id: &str) -> bool {
        self.completed_days.iter().any(|d| d == day_id)
    }
}

// ============================================================================
// Reducer Outcome Events
// ============================================================================

/// Signal emitted when a day completes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayEvent {
    /// One more day done this week; celebratory notice
    DayComplete,
    /// Every scheduled day is done; week rolled over
    WeekComplete,
}

/// Outcome of selecting a day for training
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Enter guided mode at the first incomplete exercise
    Focus { resume_index: usize },
    /// Rest day: auto-completed without entering guided mode
    RestDayCompleted(DayEvent),
}

/// Outcome of completing one exercise in guided mode
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExerciseOutcome {
    /// More exercises remain; guided index advanced
    Advanced { next_index: usize },
    /// That was the day's final exercise
    DayFinished(DayEvent),
}
