//! The progress reducer: how completion state evolves.
//!
//! Every rule in the system lives here:
//! - selecting a day (resume position, rest-day auto-complete)
//! - completing an exercise (streak gating by calendar date)
//! - completing a day (week rollover check)
//! - the derived day-lock sequence
//!
//! All methods mutate `Progress` synchronously; callers persist afterwards.

use crate::{
    DayEvent, Error, ExerciseOutcome, Progress, Result, Schedule, SelectOutcome,
};
use chrono::NaiveDate;

impl Progress {
    /// Select a day for training
    ///
    /// Rest days complete immediately. A fully completed day is rejected with
    /// `DayAlreadyComplete` and no state changes. Otherwise guided mode should
    /// start at the returned resume index (the count of already-completed
    /// exercises for that day).
    pub fn select_day(&mut self, schedule: &Schedule, day_id: &str) -> Result<SelectOutcome> {
        let day = schedule
            .day(day_id)
            .ok_or_else(|| Error::UnknownDay(day_id.to_string()))?;

        if self.day_completed(day_id) {
            return Err(Error::DayAlreadyComplete(day_id.to_string()));
        }

        if day.rest_day {
            let event = self.complete_day(schedule, day_id)?;
            return Ok(SelectOutcome::RestDayCompleted(event));
        }

        let done = self.completed_for(day_id).len();
        if done >= day.exercise_count() {
            return Err(Error::DayAlreadyComplete(day_id.to_string()));
        }

        tracing::debug!(day_id, resume_index = done, "Entering guided mode");
        Ok(SelectOutcome::Focus { resume_index: done })
    }

    /// Complete the exercise at `index` for a day
    ///
    /// `index` must be the day's current completed count (the guided position);
    /// anything else is a caller contract violation and is rejected. The streak
    /// increments at most once per calendar date, gated by `today`.
    pub fn complete_exercise(
        &mut self,
        schedule: &Schedule,
        day_id: &str,
        index: usize,
        today: NaiveDate,
    ) -> Result<ExerciseOutcome> {
        let day = schedule
            .day(day_id)
            .ok_or_else(|| Error::UnknownDay(day_id.to_string()))?;

        let total = day.exercise_count();
        let done = self.completed_for(day_id).len();
        if index >= total || index != done {
            return Err(Error::ExerciseOutOfRange {
                day: day_id.to_string(),
                index,
                len: total,
            });
        }

        let exercise_id = day.exercises[index].id.clone();
        self.completed_exercises
            .entry(day_id.to_string())
            .or_default()
            .push(exercise_id);

        if self.last_workout_date != Some(today) {
            self.streak += 1;
            tracing::debug!(streak = self.streak, %today, "Streak incremented");
        }
        self.last_workout_date = Some(today);

        if index + 1 >= total {
            let event = self.complete_day(schedule, day_id)?;
            Ok(ExerciseOutcome::DayFinished(event))
        } else {
            Ok(ExerciseOutcome::Advanced {
                next_index: index + 1,
            })
        }
    }

    /// Mark a day as completed and check for week rollover
    ///
    /// Callers must invoke this at most once per day completion; idempotency
    /// is not guaranteed here. Returns `WeekComplete` when the completed-days
    /// list now covers every scheduled day, in which case the week number
    /// increments and the per-week collections are cleared.
    pub fn complete_day(&mut self, schedule: &Schedule, day_id: &str) -> Result<DayEvent> {
        if schedule.day(day_id).is_none() {
            return Err(Error::UnknownDay(day_id.to_string()));
        }

        self.completed_days.push(day_id.to_string());

        let week_done = schedule.day_ids().all(|id| self.day_completed(id));
        if week_done {
            self.current_week += 1;
            self.completed_days.clear();
            self.completed_exercises.clear();
            tracing::info!(week = self.current_week, "Week completed, rolled over");
            Ok(DayEvent::WeekComplete)
        } else {
            tracing::info!(day_id, "Day completed");
            Ok(DayEvent::DayComplete)
        }
    }

    /// Restore the default zero state unconditionally
    ///
    /// Destructive and irreversible; the caller is responsible for user
    /// confirmation before invoking this.
    pub fn reset(&mut self) {
        *self = Progress::default();
        tracing::info!("Progress reset to defaults");
    }

    /// Check the structural invariants against a schedule
    ///
    /// Returns a list of human-readable violations, or empty Vec if the
    /// state is consistent: completed days must be known and duplicate-free,
    /// and each per-day completed list must stay within that day's
    /// exercises. A persisted file that parses but violates these is treated
    /// the same as a corrupt one.
    pub fn validate_against(&self, schedule: &Schedule) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen_days = std::collections::HashSet::new();
        for day_id in &self.completed_days {
            if schedule.day(day_id).is_none() {
                errors.push(format!("Completed day '{}' is not in the schedule", day_id));
            }
            if !seen_days.insert(day_id.as_str()) {
                errors.push(format!("Duplicate completed day '{}'", day_id));
            }
        }

        for (day_id, exercises) in &self.completed_exercises {
            let day = match schedule.day(day_id) {
                Some(day) => day,
                None => {
                    errors.push(format!(
                        "Completed exercises recorded for unknown day '{}'",
                        day_id
                    ));
                    continue;
                }
            };

            if exercises.len() > day.exercise_count() {
                errors.push(format!(
                    "Day '{}' records {} completed exercises but schedules {}",
                    day_id,
                    exercises.len(),
                    day.exercise_count()
                ));
            }

            let mut seen_exercises = std::collections::HashSet::new();
            for exercise_id in exercises {
                if !seen_exercises.insert(exercise_id.as_str()) {
                    errors.push(format!(
                        "Day '{}' records duplicate exercise '{}'",
                        day_id, exercise_id
                    ));
                }
            }
        }

        errors
    }
}

/// Whether the day at `index` is locked
///
/// Day 0 is never locked; day i is locked iff day i-1 has not been completed.
/// Derived on demand from (schedule order, completed-days); never stored.
pub fn day_locked(schedule: &Schedule, progress: &Progress, index: usize) -> bool {
    if index == 0 {
        return false;
    }
    match schedule.days.get(index - 1) {
        Some(prev) => !progress.day_completed(&prev.id),
        None => true,
    }
}

/// Guided-mode resume position for a day: the count of completed exercises
pub fn resume_index(progress: &Progress, day_id: &str) -> usize {
    progress.completed_for(day_id).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_default_schedule;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    /// Complete every exercise of a day, each completion on `on` date
    fn finish_day(
        progress: &mut Progress,
        schedule: &Schedule,
        day_id: &str,
        on: NaiveDate,
    ) -> ExerciseOutcome {
        let total = schedule.day(day_id).unwrap().exercise_count();
        let start = resume_index(progress, day_id);
        let mut last = ExerciseOutcome::Advanced { next_index: start };
        for i in start..total {
            last = progress.complete_exercise(schedule, day_id, i, on).unwrap();
        }
        last
    }

    #[test]
    fn test_select_unknown_day_is_error() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        let result = progress.select_day(&schedule, "day_99");
        assert!(matches!(result, Err(Error::UnknownDay(_))));
        assert_eq!(progress, Progress::default());
    }

    #[test]
    fn test_select_day_resumes_at_completed_count() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        assert_eq!(
            progress.select_day(&schedule, "day_1").unwrap(),
            SelectOutcome::Focus { resume_index: 0 }
        );

        progress
            .complete_exercise(&schedule, "day_1", 0, date(1))
            .unwrap();
        progress
            .complete_exercise(&schedule, "day_1", 1, date(1))
            .unwrap();

        assert_eq!(
            progress.select_day(&schedule, "day_1").unwrap(),
            SelectOutcome::Focus { resume_index: 2 }
        );
    }

    #[test]
    fn test_select_completed_day_rejected_without_mutation() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        finish_day(&mut progress, &schedule, "day_1", date(1));
        let before = progress.clone();

        let result = progress.select_day(&schedule, "day_1");
        assert!(matches!(result, Err(Error::DayAlreadyComplete(_))));
        assert_eq!(progress, before);
    }

    #[test]
    fn test_select_rest_day_completes_immediately() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        let outcome = progress.select_day(&schedule, "day_7").unwrap();
        assert_eq!(
            outcome,
            SelectOutcome::RestDayCompleted(DayEvent::DayComplete)
        );
        assert!(progress.day_completed("day_7"));
    }

    #[test]
    fn test_reselect_completed_rest_day_rejected() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        progress.select_day(&schedule, "day_7").unwrap();
        let before = progress.clone();

        let result = progress.select_day(&schedule, "day_7");
        assert!(matches!(result, Err(Error::DayAlreadyComplete(_))));
        assert_eq!(progress, before);
        assert_eq!(
            progress.completed_days.iter().filter(|d| *d == "day_7").count(),
            1
        );
    }

    #[test]
    fn test_complete_exercise_out_of_range_rejected() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();
        let total = schedule.day("day_1").unwrap().exercise_count();

        let result = progress.complete_exercise(&schedule, "day_1", total, date(1));
        assert!(matches!(result, Err(Error::ExerciseOutOfRange { .. })));

        // Skipping ahead of the guided position is also a contract violation
        let result = progress.complete_exercise(&schedule, "day_1", 1, date(1));
        assert!(matches!(result, Err(Error::ExerciseOutOfRange { .. })));
        assert!(progress.completed_for("day_1").is_empty());
    }

    #[test]
    fn test_streak_increments_once_per_calendar_day() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        finish_day(&mut progress, &schedule, "day_1", date(1));
        assert_eq!(progress.streak, 1);

        finish_day(&mut progress, &schedule, "day_2", date(1));
        assert_eq!(progress.streak, 1);

        finish_day(&mut progress, &schedule, "day_3", date(2));
        assert_eq!(progress.streak, 2);
    }

    #[test]
    fn test_completed_lists_ordered_and_duplicate_free() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        finish_day(&mut progress, &schedule, "day_1", date(1));

        let day = schedule.day("day_1").unwrap();
        let expected: Vec<String> = day.exercises.iter().map(|e| e.id.clone()).collect();
        assert_eq!(progress.completed_for("day_1"), expected.as_slice());
    }

    #[test]
    fn test_day_complete_event_without_rollover() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        let outcome = finish_day(&mut progress, &schedule, "day_1", date(1));
        assert_eq!(outcome, ExerciseOutcome::DayFinished(DayEvent::DayComplete));
        assert_eq!(progress.completed_days, vec!["day_1".to_string()]);
        assert_eq!(progress.current_week, 1);
    }

    #[test]
    fn test_six_days_on_distinct_dates() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        for (i, day_id) in ["day_1", "day_2", "day_3", "day_4", "day_5", "day_6"]
            .iter()
            .enumerate()
        {
            finish_day(&mut progress, &schedule, day_id, date(i as u32 + 1));
        }

        assert_eq!(progress.streak, 6);
        assert_eq!(progress.current_week, 1);
        assert_eq!(progress.completed_days.len(), 6);
        assert!(!day_locked(&schedule, &progress, 6), "day 7 should unlock");
    }

    #[test]
    fn test_week_rollover_clears_state_and_bumps_week() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        for (i, day_id) in ["day_1", "day_2", "day_3", "day_4", "day_5", "day_6"]
            .iter()
            .enumerate()
        {
            finish_day(&mut progress, &schedule, day_id, date(i as u32 + 1));
        }

        // Day 7 is the rest day; selecting it triggers the rollover
        let outcome = progress.select_day(&schedule, "day_7").unwrap();
        assert_eq!(
            outcome,
            SelectOutcome::RestDayCompleted(DayEvent::WeekComplete)
        );
        assert_eq!(progress.current_week, 2);
        assert!(progress.completed_days.is_empty());
        assert!(progress.completed_exercises.is_empty());
        // Streak survives the rollover
        assert_eq!(progress.streak, 6);
    }

    #[test]
    fn test_lock_derivation() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        assert!(!day_locked(&schedule, &progress, 0));
        for i in 1..schedule.days.len() {
            assert!(day_locked(&schedule, &progress, i));
        }

        finish_day(&mut progress, &schedule, "day_1", date(1));
        assert!(!day_locked(&schedule, &progress, 1));
        assert!(day_locked(&schedule, &progress, 2));
    }

    #[test]
    fn test_complete_day_unknown_id_is_error() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        let result = progress.complete_day(&schedule, "day_99");
        assert!(matches!(result, Err(Error::UnknownDay(_))));
    }

    #[test]
    fn test_validate_against_accepts_reducer_output() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        assert!(progress.validate_against(&schedule).is_empty());

        finish_day(&mut progress, &schedule, "day_1", date(1));
        finish_day(&mut progress, &schedule, "day_2", date(2));
        assert!(progress.validate_against(&schedule).is_empty());
    }

    #[test]
    fn test_validate_against_flags_inconsistent_state() {
        let schedule = build_default_schedule();

        // More completions recorded than the day schedules
        let mut progress = Progress::default();
        progress.completed_exercises.insert(
            "day_1".into(),
            vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
        );
        let errors = progress.validate_against(&schedule);
        assert!(errors.iter().any(|e| e.contains("records 5")));

        // Duplicate and unknown completed days
        let mut progress = Progress::default();
        progress.completed_days = vec!["day_1".into(), "day_1".into(), "day_99".into()];
        let errors = progress.validate_against(&schedule);
        assert!(errors.iter().any(|e| e.contains("Duplicate completed day")));
        assert!(errors.iter().any(|e| e.contains("not in the schedule")));

        // Duplicate exercise ids within a day
        let mut progress = Progress::default();
        progress
            .completed_exercises
            .insert("day_1".into(), vec!["pushup_standard".into(); 2]);
        let errors = progress.validate_against(&schedule);
        assert!(errors.iter().any(|e| e.contains("duplicate exercise")));
    }

    #[test]
    fn test_reset_restores_exact_default() {
        let schedule = build_default_schedule();
        let mut progress = Progress::default();

        finish_day(&mut progress, &schedule, "day_1", date(1));
        finish_day(&mut progress, &schedule, "day_2", date(2));
        assert_ne!(progress, Progress::default());

        progress.reset();
        assert_eq!(progress, Progress::default());
    }
}
