//! Built-in weekly schedule catalog.
//!
//! This module provides the fixed 7-day routine: six trained days plus one
//! rest day, each trained day carrying its ordered exercise list.

use crate::types::*;
use once_cell::sync::Lazy;

/// Cached default schedule - built once and reused across all operations
static DEFAULT_SCHEDULE: Lazy<Schedule> = Lazy::new(build_default_schedule_internal);

/// Get a reference to the cached default schedule
pub fn get_default_schedule() -> &'static Schedule {
    &DEFAULT_SCHEDULE
}

/// Builds the default 7-day schedule
///
/// **Note**: For production use, prefer `get_default_schedule()` which returns
/// a cached reference. This function is retained for testing and custom
/// schedule construction.
pub fn build_default_schedule() -> Schedule {
    build_default_schedule_internal()
}

fn rep_exercise(
    id: &str,
    name: &str,
    sets: u32,
    target: &str,
    category: &str,
    instructions: &[&str],
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        sets,
        target: target.into(),
        kind: ExerciseKind::RepBased,
        category: category.into(),
        instructions: instructions.iter().map(|s| (*s).into()).collect(),
        reference_url: None,
    }
}

fn timed_exercise(
    id: &str,
    name: &str,
    sets: u32,
    target: &str,
    category: &str,
    instructions: &[&str],
) -> Exercise {
    Exercise {
        kind: ExerciseKind::TimeBased,
        ..rep_exercise(id, name, sets, target, category, instructions)
    }
}

fn failure_exercise(
    id: &str,
    name: &str,
    sets: u32,
    category: &str,
    instructions: &[&str],
) -> Exercise {
    Exercise {
        kind: ExerciseKind::ToFailure,
        ..rep_exercise(id, name, sets, "To failure", category, instructions)
    }
}

fn build_default_schedule_internal() -> Schedule {
    let days = vec![
        DayRoutine {
            id: "day_1".into(),
            day_name: "Saturday".into(),
            focus: "Chest + Triceps".into(),
            rest_day: false,
            exercises: vec![
                Exercise {
                    reference_url: Some("https://www.youtube.com/watch?v=IODxDxX7oi4".into()),
                    ..rep_exercise(
                        "pushup_standard",
                        "Push-up",
                        3,
                        "15 reps",
                        "Chest",
                        &[
                            "Hands slightly wider than shoulders, body in a straight line.",
                            "Lower until your chest nearly touches the floor.",
                            "Press back up without letting your hips sag.",
                        ],
                    )
                },
                rep_exercise(
                    "pushup_incline",
                    "Incline Push-up",
                    3,
                    "12 reps",
                    "Chest",
                    &[
                        "Place hands on a bench or sturdy chair.",
                        "Keep elbows at roughly 45 degrees from your torso.",
                        "Control the descent, explode on the way up.",
                    ],
                ),
                rep_exercise(
                    "dips_chair",
                    "Chair Dips",
                    3,
                    "12 reps",
                    "Triceps",
                    &[
                        "Grip the chair edge behind you, legs extended forward.",
                        "Lower until elbows reach 90 degrees.",
                        "Drive through your palms to lock out.",
                    ],
                ),
                failure_exercise(
                    "pushup_diamond",
                    "Diamond Push-up",
                    2,
                    "Triceps",
                    &[
                        "Form a diamond with thumbs and index fingers under your chest.",
                        "Keep elbows tucked close to your sides.",
                        "Go to failure with clean form, then stop.",
                    ],
                ),
            ],
        },
        DayRoutine {
            id: "day_2".into(),
            day_name: "Sunday".into(),
            focus: "Back + Biceps".into(),
            rest_day: false,
            exercises: vec![
                Exercise {
                    reference_url: Some("https://www.youtube.com/watch?v=eGo4IYlbE5g".into()),
                    ..failure_exercise(
                        "pullup",
                        "Pull-up",
                        3,
                        "Back",
                        &[
                            "Grip the bar slightly wider than shoulders, palms away.",
                            "Pull your chin over the bar, leading with the chest.",
                            "Lower under control to a full hang.",
                        ],
                    )
                },
                rep_exercise(
                    "row_towel",
                    "Towel Row",
                    3,
                    "12 reps",
                    "Back",
                    &[
                        "Loop a towel around a door handle and lean back.",
                        "Pull your chest to your hands, squeezing the shoulder blades.",
                        "Keep your body rigid from head to heel.",
                    ],
                ),
                rep_exercise(
                    "curl_backpack",
                    "Backpack Curl",
                    3,
                    "12 reps",
                    "Biceps",
                    &[
                        "Load a backpack and hold it by the top handle.",
                        "Curl with your elbow pinned to your side.",
                        "Lower slowly over three seconds.",
                    ],
                ),
                timed_exercise(
                    "hang_dead",
                    "Dead Hang",
                    2,
                    "30 sec",
                    "Grip",
                    &[
                        "Hang from the bar with straight arms.",
                        "Keep shoulders active, pulled slightly down.",
                    ],
                ),
            ],
        },
        DayRoutine {
            id: "day_3".into(),
            day_name: "Monday".into(),
            focus: "Legs + Glutes".into(),
            rest_day: false,
            exercises: vec![
                Exercise {
                    reference_url: Some("https://www.youtube.com/watch?v=aclHkVaku9U".into()),
                    ..rep_exercise(
                        "squat_bodyweight",
                        "Bodyweight Squat",
                        4,
                        "20 reps",
                        "Legs",
                        &[
                            "Feet shoulder-width, toes slightly out.",
                            "Sit back and down until thighs pass parallel.",
                            "Drive through your heels to stand.",
                        ],
                    )
                },
                rep_exercise(
                    "lunge_walking",
                    "Walking Lunge",
                    3,
                    "12 reps per leg",
                    "Legs",
                    &[
                        "Step forward into a deep lunge, rear knee near the floor.",
                        "Keep your torso upright the whole time.",
                        "Push off the front heel into the next step.",
                    ],
                ),
                rep_exercise(
                    "bridge_glute",
                    "Glute Bridge",
                    3,
                    "15 reps",
                    "Glutes",
                    &[
                        "Lie on your back, feet flat, heels close to your hips.",
                        "Drive hips up and squeeze hard at the top.",
                        "Pause one second before lowering.",
                    ],
                ),
                timed_exercise(
                    "wall_sit",
                    "Wall Sit",
                    2,
                    "45 sec",
                    "Legs",
                    &[
                        "Back flat against the wall, thighs parallel to the floor.",
                        "Hold steady; do not rest hands on your knees.",
                    ],
                ),
            ],
        },
        DayRoutine {
            id: "day_4".into(),
            day_name: "Tuesday".into(),
            focus: "Shoulders + Core".into(),
            rest_day: false,
            exercises: vec![
                rep_exercise(
                    "pushup_pike",
                    "Pike Push-up",
                    3,
                    "10 reps",
                    "Shoulders",
                    &[
                        "Hips high in an inverted V, hands shoulder-width.",
                        "Lower the crown of your head toward the floor.",
                        "Press back up until elbows lock.",
                    ],
                ),
                Exercise {
                    reference_url: Some("https://www.youtube.com/watch?v=ASdvN_XEl_c".into()),
                    ..timed_exercise(
                        "plank_standard",
                        "Plank",
                        3,
                        "45 sec",
                        "Core",
                        &[
                            "Forearms down, body in one straight line.",
                            "Brace your abs as if taking a punch.",
                            "Do not let the hips rise or sag.",
                        ],
                    )
                },
                rep_exercise(
                    "raise_lateral",
                    "Lateral Raise (bottles)",
                    3,
                    "15 reps",
                    "Shoulders",
                    &[
                        "Hold a filled bottle in each hand at your sides.",
                        "Raise to shoulder height with a slight elbow bend.",
                        "Lower slowly; no swinging.",
                    ],
                ),
                rep_exercise(
                    "twist_russian",
                    "Russian Twist",
                    3,
                    "20 reps",
                    "Core",
                    &[
                        "Sit with heels hovering, torso leaned back.",
                        "Rotate shoulder to shoulder, touching the floor each side.",
                    ],
                ),
            ],
        },
        DayRoutine {
            id: "day_5".into(),
            day_name: "Wednesday".into(),
            focus: "Full Body Circuit".into(),
            rest_day: false,
            exercises: vec![
                Exercise {
                    reference_url: Some("https://www.youtube.com/watch?v=TU8QYVW0gDU".into()),
                    ..rep_exercise(
                        "burpee",
                        "Burpee",
                        3,
                        "10 reps",
                        "Full Body",
                        &[
                            "Squat, kick back to a plank, push-up, jump in, jump up.",
                            "Land soft and move straight into the next rep.",
                        ],
                    )
                },
                timed_exercise(
                    "climber_mountain",
                    "Mountain Climbers",
                    3,
                    "30 sec",
                    "Cardio",
                    &[
                        "From a plank, drive knees to chest alternately.",
                        "Keep hips level and pace fast but controlled.",
                    ],
                ),
                rep_exercise(
                    "squat_jump",
                    "Jump Squat",
                    3,
                    "12 reps",
                    "Legs",
                    &[
                        "Squat to parallel, then jump as high as you can.",
                        "Absorb the landing into the next squat.",
                    ],
                ),
                timed_exercise(
                    "jack_jumping",
                    "Jumping Jacks",
                    2,
                    "60 sec",
                    "Cardio",
                    &["Full range, arms overhead every rep.", "Stay on the balls of your feet."],
                ),
            ],
        },
        DayRoutine {
            id: "day_6".into(),
            day_name: "Thursday".into(),
            focus: "Arms + Abs Finisher".into(),
            rest_day: false,
            exercises: vec![
                rep_exercise(
                    "pushup_close",
                    "Close-grip Push-up",
                    3,
                    "12 reps",
                    "Triceps",
                    &[
                        "Hands directly under shoulders, elbows tucked.",
                        "Lower in two seconds, press up in one.",
                    ],
                ),
                rep_exercise(
                    "curl_isometric",
                    "Isometric Towel Curl",
                    3,
                    "10 reps",
                    "Biceps",
                    &[
                        "Stand on a towel, curl against its resistance.",
                        "Pull maximally for three seconds per rep.",
                    ],
                ),
                rep_exercise(
                    "raise_leg",
                    "Lying Leg Raise",
                    3,
                    "15 reps",
                    "Core",
                    &[
                        "Lie flat, hands under your lower back.",
                        "Raise legs to vertical without bending knees.",
                        "Lower until heels hover just off the floor.",
                    ],
                ),
                timed_exercise(
                    "plank_side",
                    "Side Plank",
                    2,
                    "30 sec per side",
                    "Core",
                    &[
                        "Stack feet, forearm under shoulder.",
                        "Lift hips to form a straight line, hold.",
                    ],
                ),
            ],
        },
        DayRoutine {
            id: "day_7".into(),
            day_name: "Friday".into(),
            focus: "Rest + Recovery".into(),
            rest_day: true,
            exercises: vec![],
        },
    ];

    Schedule { days }
}

impl Schedule {
    /// Validate the schedule for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.days.is_empty() {
            errors.push("Schedule has no days".to_string());
        }

        let mut seen_days = std::collections::HashSet::new();
        for day in &self.days {
            if day.id.is_empty() {
                errors.push("Day routine has empty ID".to_string());
            }
            if !seen_days.insert(day.id.as_str()) {
                errors.push(format!("Duplicate day id '{}'", day.id));
            }
            if day.day_name.is_empty() {
                errors.push(format!("Day '{}' has empty name", day.id));
            }

            if day.rest_day {
                if !day.exercises.is_empty() {
                    errors.push(format!("Rest day '{}' has exercises", day.id));
                }
                continue;
            }

            if day.exercises.is_empty() {
                errors.push(format!("Trained day '{}' has no exercises", day.id));
            }

            let mut seen_exercises = std::collections::HashSet::new();
            for exercise in &day.exercises {
                if exercise.id.is_empty() {
                    errors.push(format!("Day '{}' has exercise with empty ID", day.id));
                }
                if !seen_exercises.insert(exercise.id.as_str()) {
                    errors.push(format!(
                        "Day '{}' has duplicate exercise id '{}'",
                        day.id, exercise.id
                    ));
                }
                if exercise.name.is_empty() {
                    errors.push(format!(
                        "Exercise '{}' on day '{}' has empty name",
                        exercise.id, day.id
                    ));
                }
                if exercise.sets == 0 {
                    errors.push(format!(
                        "Exercise '{}' on day '{}' has zero sets",
                        exercise.id, day.id
                    ));
                }
                if exercise.instructions.is_empty() {
                    errors.push(format!(
                        "Exercise '{}' on day '{}' has no instructions",
                        exercise.id, day.id
                    ));
                }
            }
        }

        errors
    }
}
