use chrono::Local;
use clap::{Parser, Subcommand};
use forge_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Weekly workout schedule tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show streak and current week (default)
    Home,

    /// Show the week schedule with per-day progress
    List,

    /// Start (or resume) the guided flow for a day
    Start {
        /// Day id from the schedule (e.g. day_1)
        day_id: String,

        /// Complete all remaining exercises without prompting (for testing)
        #[arg(long)]
        auto_complete: bool,
    },

    /// Show streak, totals, completion rate and per-day volume
    Stats,

    /// Reset all progress to defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    forge_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let progress_path = data_dir.join("progress.json");

    // Load and validate the schedule once
    let schedule = get_default_schedule();
    let errors = schedule.validate();
    if !errors.is_empty() {
        eprintln!("Schedule validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid schedule".into()));
    }

    match cli.command {
        Some(Commands::Home) | None => cmd_home(schedule, &progress_path, &config),
        Some(Commands::List) => cmd_list(schedule, &progress_path),
        Some(Commands::Start {
            day_id,
            auto_complete,
        }) => cmd_start(schedule, &progress_path, &day_id, auto_complete),
        Some(Commands::Stats) => cmd_stats(schedule, &progress_path),
        Some(Commands::Reset { yes }) => cmd_reset(&progress_path, yes),
    }
}

fn cmd_home(schedule: &Schedule, progress_path: &std::path::Path, config: &Config) -> Result<()> {
    let progress = Progress::load_checked(progress_path, schedule)?;

    println!();
    println!("  Welcome back, {}!", config.user.name);
    println!();
    println!("  Current streak: {} days", progress.streak);
    println!("  Week {} in progress", progress.current_week);
    println!(
        "  {} of {} days completed this week",
        progress.completed_days.len(),
        schedule.days.len()
    );
    println!();
    println!("  Run `forge list` to see the schedule.");
    println!();

    Ok(())
}

fn cmd_list(schedule: &Schedule, progress_path: &std::path::Path) -> Result<()> {
    let progress = Progress::load_checked(progress_path, schedule)?;

    println!();
    println!("  WEEK {} SCHEDULE", progress.current_week);
    println!("  ─────────────────────────────────────────");

    for (index, day) in schedule.days.iter().enumerate() {
        let locked = day_locked(schedule, &progress, index);
        let complete = progress.day_completed(&day.id);
        let done = progress.completed_for(&day.id).len();
        let total = day.exercise_count();

        let status = if complete {
            "done".to_string()
        } else if locked {
            "locked".to_string()
        } else if day.rest_day {
            "rest".to_string()
        } else {
            format!("{}/{}", done, total)
        };

        println!(
            "  {:<8} {:<10} {:<22} [{}]",
            day.id, day.day_name, day.focus, status
        );
    }

    println!();
    println!("  Run `forge start <day_id>` to train.");
    println!();

    Ok(())
}

fn cmd_start(
    schedule: &Schedule,
    progress_path: &std::path::Path,
    day_id: &str,
    auto_complete: bool,
) -> Result<()> {
    let progress = Progress::load_checked(progress_path, schedule)?;

    // Locked days are not selectable (mirrors the disabled buttons in a UI)
    if let Some(index) = schedule.index_of(day_id) {
        if day_locked(schedule, &progress, index) {
            return Err(Error::DayLocked(day_id.to_string()));
        }
    }

    let mut app = App::new(progress);
    app.navigate(Screen::List);

    match app.select_day(schedule, day_id) {
        Ok(Some(event)) => {
            // Rest day auto-completed without entering focus mode
            app.progress.save(progress_path)?;
            println!("\nRest day logged. Recover well.");
            announce(event, &app.progress);
            return Ok(());
        }
        Ok(None) => {}
        Err(Error::DayAlreadyComplete(_)) => {
            println!("\nDay already completed! Great job.");
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    let day = schedule
        .day(day_id)
        .ok_or_else(|| Error::UnknownDay(day_id.to_string()))?;
    let total = day.exercise_count();

    // Guided focus flow
    loop {
        let index = match &app.focus {
            Some(focus) => focus.exercise_index,
            None => break,
        };
        display_exercise(&day.exercises[index], index, total);

        if !auto_complete {
            match prompt_exercise_action()? {
                ExerciseAction::Complete => {}
                ExerciseAction::Back => {
                    app.back();
                    println!("\nReturning to the list. Completed exercises are saved.");
                    break;
                }
            }
        }

        let today = Local::now().date_naive();
        let event = app.complete_current_exercise(schedule, today)?;
        app.progress.save(progress_path)?;

        if let Some(event) = event {
            announce(event, &app.progress);
            break;
        }
    }

    Ok(())
}

fn cmd_stats(schedule: &Schedule, progress_path: &std::path::Path) -> Result<()> {
    let progress = Progress::load_checked(progress_path, schedule)?;

    println!();
    println!("  STATS & ANALYTICS");
    println!("  ─────────────────────────────────────────");
    println!("  Streak:          {} days", progress.streak);
    println!("  Total completed: {} exercises", total_completed(&progress));
    println!(
        "  Completion rate: {}%",
        completion_rate(schedule, &progress)
    );
    println!();
    println!("  WEEKLY EXERCISE VOLUME");

    for volume in day_volumes(schedule, &progress) {
        let bar: String = std::iter::repeat('█')
            .take(volume.completed)
            .chain(std::iter::repeat('░').take(volume.total.saturating_sub(volume.completed)))
            .collect();
        println!(
            "  {:<4} {:<8} {}/{}",
            volume.label, bar, volume.completed, volume.total
        );
    }
    println!();

    Ok(())
}

fn cmd_reset(progress_path: &std::path::Path, yes: bool) -> Result<()> {
    if !yes && !confirm_reset()? {
        println!("Reset cancelled.");
        return Ok(());
    }

    Progress::update(progress_path, |progress| {
        progress.reset();
        Ok(())
    })?;

    println!("Progress reset to defaults.");
    Ok(())
}

fn announce(event: DayEvent, progress: &Progress) {
    match event {
        DayEvent::DayComplete => {
            println!("\n╭─────────────────────────────────────────╮");
            println!("│  DAY COMPLETE — rest up!                │");
            println!("╰─────────────────────────────────────────╯");
        }
        DayEvent::WeekComplete => {
            println!("\n╭─────────────────────────────────────────╮");
            println!("│  WEEK COMPLETED! LEVEL UP!              │");
            println!("╰─────────────────────────────────────────╯");
            println!("  Starting week {}.", progress.current_week);
        }
    }
}

fn display_exercise(exercise: &Exercise, index: usize, total: usize) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  FOCUS — sequence {}/{}", index + 1, total);
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {}  ({})", exercise.name, exercise.category);
    let target_label = match exercise.kind {
        ExerciseKind::RepBased => "Reps",
        ExerciseKind::TimeBased => "Hold",
        ExerciseKind::ToFailure => "Target",
    };
    println!("  Sets: {}   {}: {}", exercise.sets, target_label, exercise.target);
    println!();
    for (step, instruction) in exercise.instructions.iter().enumerate() {
        println!("  {}. {}", step + 1, instruction);
    }
    if let Some(ref url) = exercise.reference_url {
        println!();
        println!("  ℹ Reference: {}", url);
    }
    println!();
}

enum ExerciseAction {
    Complete,
    Back,
}

fn prompt_exercise_action() -> Result<ExerciseAction> {
    println!("─────────────────────────────────────────");
    println!("Press Enter when done");
    println!("  'b' + Enter to return to the list");
    print!("> ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let action = match input.trim().to_lowercase().as_str() {
        "b" => ExerciseAction::Back,
        _ => ExerciseAction::Complete,
    };

    Ok(action)
}

fn confirm_reset() -> Result<bool> {
    print!("Reset all progress? This cannot be undone. [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}
