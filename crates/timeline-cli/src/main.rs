//! `timeline` CLI — inspect and reschedule a single-day timeline from the command line.
//!
//! Events are read as a JSON array of `{id?, name, start, end}` objects with
//! `"HH:MM"` times. Without `-i`, the timeline starts from the configuration
//! (the demo schedule by default). Nothing is saved between runs: commands that
//! change events write the resulting list to `-o` or stdout.
//!
//! ## Usage
//!
//! ```sh
//! # Draw the demo schedule with its conflicts and suggestion
//! timeline render
//!
//! # Render a file as JSON for another presenter
//! timeline render -i day.json --json
//!
//! # List conflicts inside custom working hours
//! timeline --window-start 09:00 --window-end 17:00 conflicts -i day.json
//!
//! # Add, move, or apply the suggested fix and write the new list
//! timeline add -i day.json --name Review --start 15:00 --end 15:30 -o day.json
//! timeline move -i day.json --id 102 --start 13:00
//! cat day.json | timeline resolve -i -
//!
//! # Time conversions
//! timeline convert 13:30
//! ```

mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};
use timeline_engine::{
    convert, Event, EventId, EventStore, Timeline, TimelineConfig, WorkingWindow,
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "timeline",
    version,
    about = "Single-day timeline: conflicts, suggestions and rescheduling"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file (working hours, track height, demo seed)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Working window start, HH:MM (overrides the configuration)
    #[arg(long, global = true)]
    window_start: Option<String>,

    /// Working window end, HH:MM (overrides the configuration)
    #[arg(long, global = true)]
    window_end: Option<String>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Args)]
struct Input {
    /// Events JSON file, or "-" for stdin (configured start-up events if omitted)
    #[arg(short, long)]
    input: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw the timeline with hour labels, conflicts and the suggestion
    Render {
        #[command(flatten)]
        input: Input,
        /// Print the render snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List conflicting events, their overlaps and the suggested fix
    Conflicts {
        #[command(flatten)]
        input: Input,
    },
    /// Add an event and write the updated event list
    Add {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        name: String,
        /// Start time, HH:MM
        #[arg(long)]
        start: String,
        /// End time, HH:MM
        #[arg(long)]
        end: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Move an event to a new start time, keeping its duration
    Move {
        #[command(flatten)]
        input: Input,
        #[arg(long)]
        id: u64,
        /// New start time, HH:MM
        #[arg(long)]
        start: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Apply the suggested slot to the first conflicting event
    Resolve {
        #[command(flatten)]
        input: Input,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show a time as minutes, 12-hour text and track offset
    Convert {
        /// Time of day, HH:MM
        time: String,
    },
}

/// Event as written in input files; `id` is assigned when missing.
#[derive(Deserialize)]
struct EventInput {
    id: Option<u64>,
    name: String,
    start: String,
    end: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_subscriber(&cli.log_level);

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Render { input, json } => {
            let timeline = build_timeline(&config, &input)?;
            let view = timeline.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render::render_view(&view));
            }
        }
        Commands::Conflicts { input } => {
            let timeline = build_timeline(&config, &input)?;
            let conflicts = timeline.conflicts();
            let pairs = timeline.conflict_pairs();
            let advice = timeline.advice();
            print!(
                "{}",
                render::render_conflicts(&conflicts, &pairs, advice.as_deref())
            );
        }
        Commands::Add {
            input,
            name,
            start,
            end,
            output,
        } => {
            let mut timeline = build_timeline(&config, &input)?;
            let event = timeline
                .add_event(&name, &start, &end)
                .context("Failed to add event")?;
            eprintln!("Added \"{}\" ({}).", event.name, event.display_range());
            write_events(output.as_deref(), timeline.events())?;
        }
        Commands::Move {
            input,
            id,
            start,
            output,
        } => {
            let mut timeline = build_timeline(&config, &input)?;
            let new_start = convert::time_to_minutes(&start).context("Invalid --start")?;
            let event = timeline
                .move_event(EventId(id), i64::from(new_start))
                .context("Failed to move event")?;
            eprintln!(
                "Event \"{}\" rescheduled to {}.",
                event.name,
                convert::format_minutes_display(i64::from(event.start))
            );
            write_events(output.as_deref(), timeline.events())?;
        }
        Commands::Resolve { input, output } => {
            let mut timeline = build_timeline(&config, &input)?;
            match timeline
                .apply_suggestion()
                .context("Failed to resolve conflicts")?
            {
                Some(event) => eprintln!(
                    "Event \"{}\" rescheduled to {}.",
                    event.name,
                    event.display_range()
                ),
                None => eprintln!("No conflicts."),
            }
            write_events(output.as_deref(), timeline.events())?;
        }
        Commands::Convert { time } => {
            let window = config.window()?;
            let minutes = convert::time_to_minutes(&time)
                .with_context(|| format!("Invalid time: {}", time))?;
            println!("Time:     {}", convert::minutes_to_time(i64::from(minutes)));
            println!("Minutes:  {}", minutes);
            println!("Display:  {}", convert::format_minutes_display(i64::from(minutes)));
            println!(
                "Offset:   {:.1}px ({})",
                convert::minutes_to_pixels(minutes, &window),
                window.label()
            );
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins over `--log-level`.
fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .compact();

    let _ = subscriber.try_init();
}

/// Configuration file (or defaults) with the window flags applied on top.
fn load_config(cli: &Cli) -> Result<TimelineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            TimelineConfig::from_json(&json)
                .with_context(|| format!("Failed to parse config: {}", path))?
        }
        None => TimelineConfig::default(),
    };

    if let Some(start) = &cli.window_start {
        config.working_start = start.clone();
    }
    if let Some(end) = &cli.window_end {
        config.working_end = end.clone();
    }

    // Validate early so every subcommand reports a bad window the same way.
    config.window().context("Invalid working window")?;
    debug!(?config, "configuration loaded");
    Ok(config)
}

fn build_timeline(config: &TimelineConfig, input: &Input) -> Result<Timeline> {
    let Some(path) = input.input.as_deref() else {
        return Timeline::from_config(config).context("Invalid configuration");
    };

    let json = read_input(path)?;
    let store = parse_events(&json).context("Failed to load events")?;
    let window: WorkingWindow = config.window()?;
    Ok(Timeline::new(store, window))
}

/// Events with ids are inserted as-is; the rest get fresh ids, in file order.
fn parse_events(json: &str) -> Result<EventStore> {
    let inputs: Vec<EventInput> = serde_json::from_str(json).context("Invalid events JSON")?;

    let mut store = EventStore::new();
    for input in inputs {
        let start = convert::time_to_minutes(&input.start)?;
        let end = convert::time_to_minutes(&input.end)?;
        match input.id {
            Some(id) => {
                let event = Event {
                    id: EventId(id),
                    name: input.name,
                    start,
                    end,
                };
                store.insert(event)?;
            }
            None => {
                store.add(&input.name, start, end)?;
            }
        }
    }
    Ok(store)
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
}

fn write_events(path: Option<&str>, events: &[Event]) -> Result<()> {
    let json = serde_json::to_string_pretty(events)?;
    match path {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", json);
        }
    }
    Ok(())
}
