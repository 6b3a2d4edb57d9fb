//! `timeprogram` CLI: view, edit and convert weekly on/off timeprograms.
//!
//! ## Usage
//!
//! ```sh
//! # Normalize one day's intervals (stdin → stdout)
//! echo '[{"start":"08:00","stop":"12:00","on":true},{"start":"10:00","stop":"11:00","on":false}]' \
//!   | timeprogram normalize
//!
//! # Show an entity's schedule from a host state dump
//! timeprogram show --state states.json --entity sensor.remko_mqtt_timeprogram_dhw_a
//!
//! # Edit and print the resulting update_timeprogram service call
//! timeprogram edit --state states.json --config card.toml \
//!   --add mon/06:00-08:00 --add mon/07:00-07:30/off --delete sun/0
//!
//! # Convert between week JSON and the device register
//! timeprogram encode -i week.json
//! timeprogram decode -i register.txt
//! ```
//!
//! Set `RUST_LOG=debug` for session traces.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use timeprogram_core::coverage::{self, Coverage};
use timeprogram_core::{
    register, EditorConfig, InMemoryHost, Interval, ScheduleEditor, TimeOfDay, WeekSchedule,
    Weekday,
};

#[derive(Parser)]
#[command(
    name = "timeprogram",
    version,
    about = "View and edit weekly on/off heat pump timeprograms"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a JSON array of one day's intervals
    Normalize {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show an entity's timeprogram from a host state file
    Show {
        /// JSON object mapping entity ids to host state objects
        #[arg(long)]
        state: PathBuf,
        #[command(flatten)]
        target: Target,
    },
    /// Apply edits and write the resulting update_timeprogram service call
    Edit {
        /// JSON object mapping entity ids to host state objects
        #[arg(long)]
        state: PathBuf,
        #[command(flatten)]
        target: Target,
        /// Interval to add, e.g. "mon/06:00-08:00" or "tue/12:00-13:00/off"
        #[arg(long = "add", value_name = "DAY/START-STOP[/on|off]")]
        add: Vec<String>,
        /// Row to delete after all adds, e.g. "mon/0"
        #[arg(long = "delete", value_name = "DAY/INDEX")]
        delete: Vec<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Encode week schedule JSON into a device register string
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode a device register string into week schedule JSON
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Which entity to edit: a TOML editor config, an entity id, or both
/// (the id then overrides the config's).
#[derive(Args)]
struct Target {
    /// Entity id carrying the timeprogram attribute
    #[arg(long)]
    entity: Option<String>,
    /// Editor config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { input, output } => {
            let json = read_input(input.as_deref())?;
            let intervals: Vec<Interval> =
                serde_json::from_str(&json).context("Failed to parse interval list")?;
            let normalized = timeprogram_core::normalize(&intervals);
            info!("normalized {} intervals into {}", intervals.len(), normalized.len());
            write_output(output.as_deref(), &serde_json::to_string_pretty(&normalized)?)?;
        }
        Commands::Show { state, target } => {
            let host = load_host(&state)?;
            let mut editor = ScheduleEditor::new(target.resolve()?);
            editor.sync(&host)?;
            print!("{}", render(&editor));
        }
        Commands::Edit {
            state,
            target,
            add,
            delete,
            output,
        } => {
            let mut host = load_host(&state)?;
            let mut editor = ScheduleEditor::new(target.resolve()?);
            editor.sync(&host)?;

            for entry in &add {
                apply_add(&mut editor, entry).with_context(|| format!("Invalid --add '{}'", entry))?;
            }
            for entry in &delete {
                let (day, index) =
                    parse_delete(entry).with_context(|| format!("Invalid --delete '{}'", entry))?;
                if editor.delete(day, index).is_none() {
                    bail!("No row {} on {}", index, day);
                }
            }

            editor.save(&mut host);
            let call = host
                .calls()
                .last()
                .context("No update_timeprogram call was dispatched")?;
            write_output(output.as_deref(), &serde_json::to_string_pretty(call)?)?;
        }
        Commands::Encode { input, output } => {
            let json = read_input(input.as_deref())?;
            let week = WeekSchedule::from_json(&json).context("Failed to parse week schedule")?;
            write_output(output.as_deref(), &register::encode(&week))?;
        }
        Commands::Decode { input, output } => {
            let hex = read_input(input.as_deref())?;
            let week = register::decode(&hex).context("Failed to decode register")?;
            write_output(output.as_deref(), &serde_json::to_string_pretty(&week)?)?;
        }
    }

    Ok(())
}

impl Target {
    fn resolve(&self) -> Result<EditorConfig> {
        let mut config = match (&self.config, &self.entity) {
            (Some(path), _) => {
                let raw = read_input(Some(path.as_path()))?;
                EditorConfig::from_toml_str(&raw)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))?
            }
            (None, Some(entity)) => EditorConfig::new(entity.clone()),
            (None, None) => bail!("Either --entity or --config is required"),
        };
        if let Some(entity) = &self.entity {
            config.entity = entity.clone();
        }
        Ok(config)
    }
}

fn load_host(path: &Path) -> Result<InMemoryHost> {
    let raw = read_input(Some(path))?;
    InMemoryHost::from_json(&raw)
        .with_context(|| format!("Failed to parse state: {}", path.display()))
}

/// Run `DAY/START-STOP[/on|off]` through the three-step add flow.
fn apply_add(editor: &mut ScheduleEditor, entry: &str) -> Result<()> {
    let mut parts = entry.split('/');
    let day: Weekday = parts.next().unwrap_or_default().parse()?;
    let range = parts.next().context("missing START-STOP")?;
    let on = match parts.next() {
        None | Some("on") => true,
        Some("off") => false,
        Some(other) => bail!("state must be 'on' or 'off', got '{}'", other),
    };
    let (start, stop) = range.split_once('-').context("range must be START-STOP")?;
    let start: TimeOfDay = start.parse()?;
    let stop: TimeOfDay = stop.parse()?;

    let mut flow = editor.begin_add(day);
    flow.choose_time(Some(start))?;
    flow.choose_time(Some(stop))?;
    flow.choose_on(Some(on))?;
    editor
        .finish_add(&flow)
        .context("timeprogram is not loaded")?;
    Ok(())
}

fn parse_delete(entry: &str) -> Result<(Weekday, usize)> {
    let (day, index) = entry.split_once('/').context("expected DAY/INDEX")?;
    Ok((day.parse()?, index.parse().context("index must be a number")?))
}

/// Text rendering of the editor: title, then per day a count, a 96-char
/// coverage bar and the rows.
fn render(editor: &ScheduleEditor) -> String {
    let mut out = String::new();
    out.push_str(editor.title());
    if editor.session().is_some_and(|s| s.is_dirty()) {
        out.push_str(" (unsaved changes)");
    }
    out.push('\n');

    let Some(session) = editor.session() else {
        return out;
    };
    for day in Weekday::ALL {
        let rows = session.rows(day);
        let bar: String = coverage::bar(session.intervals(day))
            .iter()
            .map(|slot| match slot {
                Coverage::On => '#',
                Coverage::Off => 'x',
                Coverage::None => '.',
            })
            .collect();
        out.push_str(&format!("{:<10} {:>2} {}\n", day.label(), rows.len(), bar));
        if rows.is_empty() {
            out.push_str("  (no intervals)\n");
        }
        for row in rows {
            out.push_str(&format!(
                "  [{}] {}{}\n",
                row.index,
                row.interval,
                if row.is_new { " NEW" } else { "" }
            ));
        }
    }
    out
}

/// File contents, or all of stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => io::read_to_string(io::stdin()).context("Failed to read from stdin"),
    }
}

/// Write `content` plus a trailing newline to `path`, or to stdout.
fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    let mut sink: Box<dyn Write> = match path {
        Some(path) => Box::new(
            fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    writeln!(sink, "{}", content)
        .and_then(|()| sink.flush())
        .context("Failed to write output")
}
