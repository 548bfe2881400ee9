use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use cli::{BatchReport, CliError, RawInput, output};
use scoring::{
    ScoringEngine, ScoringTable,
    models::{EventId, EventInfo, RawScores, parse_demographics},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "acft")]
#[command(about = "Army Combat Fitness Test score calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a full six-event test
    Score {
        #[command(flatten)]
        events: EventArgs,

        #[arg(long, env = "ACFT_AGE_GROUP")]
        age_group: Option<String>,

        #[arg(long, env = "ACFT_GENDER")]
        gender: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Score a single event
    Event { event: String, value: String },
    /// Score every entry in a JSON batch file
    Batch {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// Print scoring charts
    Table { event: Option<String> },
}

/// Raw values per event. Timed events accept seconds or m:ss.
#[derive(Args)]
struct EventArgs {
    #[arg(long)]
    deadlift: Option<f64>,

    #[arg(long)]
    power_throw: Option<f64>,

    #[arg(long)]
    pushups: Option<f64>,

    #[arg(long)]
    sprint_drag_carry: Option<String>,

    #[arg(long)]
    plank: Option<String>,

    #[arg(long)]
    two_mile_run: Option<String>,
}

impl EventArgs {
    fn raw_scores(&self) -> scoring::Result<RawScores> {
        let timed = |value: &Option<String>| -> scoring::Result<Option<f64>> {
            value
                .as_ref()
                .map(|v| RawInput::Text(v.clone()).to_value())
                .transpose()
        };

        let pairs = [
            (EventId::Deadlift, self.deadlift),
            (EventId::PowerThrow, self.power_throw),
            (EventId::Pushups, self.pushups),
            (EventId::SprintDragCarry, timed(&self.sprint_drag_carry)?),
            (EventId::Plank, timed(&self.plank)?),
            (EventId::TwoMileRun, timed(&self.two_mile_run)?),
        ];

        Ok(pairs
            .into_iter()
            .fold(RawScores::new(), |scores, (event, value)| match value {
                Some(value) => scores.with(event, value),
                None => scores,
            }))
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    format!("acft={},cli={},scoring={}", log_level, log_level, log_level).into()
                }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode, CliError> {
    let table = ScoringTable::standard()?;

    match command {
        Commands::Score {
            events,
            age_group,
            gender,
            json,
        } => handle_score(table, &events, age_group, gender, json),
        Commands::Event { event, value } => handle_event(table, &event, &value),
        Commands::Batch { file, json } => handle_batch(table, file, json),
        Commands::Table { event } => handle_table(table, event.as_deref()),
    }
}

fn handle_score(
    table: &ScoringTable,
    events: &EventArgs,
    age_group: Option<String>,
    gender: Option<String>,
    json: bool,
) -> Result<ExitCode, CliError> {
    let (age_group, gender) = parse_demographics(age_group.as_deref(), gender.as_deref())?;
    let raw_scores = events.raw_scores()?;

    let (result, rows) =
        ScoringEngine::new(table).score_breakdown(&raw_scores, age_group, gender)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", output::render_result(&result, &rows));
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_event(table: &ScoringTable, event: &str, value: &str) -> Result<ExitCode, CliError> {
    let event: EventId = event.parse()?;
    let info = EventInfo::for_event(event);
    let value = match value.parse::<f64>() {
        Ok(number) => number,
        Err(_) => RawInput::Text(value.to_string()).to_value()?,
    };

    let points = ScoringEngine::new(table).score_event(event, value)?;
    println!(
        "{}: {} -> {} points",
        info.label,
        output::display_value(&info, value),
        points
    );

    Ok(ExitCode::SUCCESS)
}

fn handle_batch(table: &ScoringTable, file: PathBuf, json: bool) -> Result<ExitCode, CliError> {
    tracing::info!("Loading batch file: {}", file.display());

    let content = std::fs::read_to_string(&file)?;
    let report = BatchReport::from_json(table, &content)?;
    report.log_warnings();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for outcome in &report.outcomes {
            println!("== {}", outcome.label);
            match (&outcome.result, &outcome.error) {
                (Some(result), _) => print!("{}", output::render_result(result, &outcome.rows)),
                (None, Some(error)) => println!("error: {}", error),
                (None, None) => {}
            }
            println!();
        }
        println!(
            "Summary: {} scored ({} passed), {} failed",
            report.success_count(),
            report.passed_count(),
            report.error_count()
        );
    }

    if report.error_count() > 0 {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_table(table: &ScoringTable, event: Option<&str>) -> Result<ExitCode, CliError> {
    match event {
        Some(name) => print!("{}", output::render_table(table.get_definition_by_name(name)?)),
        None => {
            for definition in table.definitions() {
                println!("{}", output::render_table(definition));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
