//! Navigation/view controller.
//!
//! Tracks which screen is visible and the transient guided-mode position.
//! All business rules live in the reducer; this layer only decides which
//! screen to show next based on reducer outcomes.

use crate::{
    DayEvent, Error, ExerciseOutcome, Progress, Result, Schedule, SelectOutcome,
};
use chrono::NaiveDate;

/// Top-level screens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    List,
    Progression,
}

/// Transient guided-mode position; never persisted
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Focus {
    pub day_id: String,
    pub exercise_index: usize,
}

/// Explicit application state: progress plus transient navigation
///
/// The focus overlay is only ever set for a non-rest day with an incomplete
/// exercise list.
#[derive(Clone, Debug)]
pub struct App {
    pub progress: Progress,
    pub screen: Screen,
    pub focus: Option<Focus>,
}

impl App {
    pub fn new(progress: Progress) -> Self {
        Self {
            progress,
            screen: Screen::Home,
            focus: None,
        }
    }

    /// Plain navigation between the main screens; leaves focus untouched
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Whether the guided overlay is active
    pub fn in_focus(&self) -> bool {
        self.focus.is_some()
    }

    /// Select a day from the list screen
    ///
    /// Trained, incomplete day: enters focus mode. Rest day: auto-completes
    /// and stays on the list, returning the event for the caller to announce.
    /// Errors (unknown day, already complete) propagate with no transition.
    pub fn select_day(&mut self, schedule: &Schedule, day_id: &str) -> Result<Option<DayEvent>> {
        match self.progress.select_day(schedule, day_id)? {
            SelectOutcome::Focus { resume_index } => {
                self.focus = Some(Focus {
                    day_id: day_id.to_string(),
                    exercise_index: resume_index,
                });
                Ok(None)
            }
            SelectOutcome::RestDayCompleted(event) => {
                self.focus = None;
                self.screen = Screen::List;
                Ok(Some(event))
            }
        }
    }

    /// Complete the exercise at the current guided position
    ///
    /// Stays in focus with the index advanced, or exits to the list when the
    /// day finishes (returning the day/week event).
    pub fn complete_current_exercise(
        &mut self,
        schedule: &Schedule,
        today: NaiveDate,
    ) -> Result<Option<DayEvent>> {
        let focus = self
            .focus
            .as_ref()
            .ok_or_else(|| Error::State("not in guided mode".into()))?;
        let day_id = focus.day_id.clone();
        let index = focus.exercise_index;

        match self
            .progress
            .complete_exercise(schedule, &day_id, index, today)?
        {
            ExerciseOutcome::Advanced { next_index } => {
                self.focus = Some(Focus {
                    day_id,
                    exercise_index: next_index,
                });
                Ok(None)
            }
            ExerciseOutcome::DayFinished(event) => {
                self.focus = None;
                self.screen = Screen::List;
                Ok(Some(event))
            }
        }
    }

    /// Leave guided mode, discarding the position
    ///
    /// Exercise completions already recorded remain in the progress state.
    pub fn back(&mut self) {
        self.focus = None;
        self.screen = Screen::List;
    }
}
