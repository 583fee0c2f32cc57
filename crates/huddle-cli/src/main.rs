//! `huddle` CLI — run the slot recommendation engine over JSON snapshots.
//!
//! ## Usage
//!
//! ```sh
//! # Recommend from an event snapshot and an availability dump
//! huddle recommend --event event.json --availability availability.json
//!
//! # Read the availability dump from stdin
//! curl -s api/events/42/availability | huddle recommend --event event.json
//!
//! # Count distinct users per slot instead of raw submissions
//! huddle recommend -e event.json -a availability.json --dedupe
//!
//! # Write the result to a file
//! huddle recommend -e event.json -a availability.json -o result.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};

use huddle_engine::{recommend, Availability, Event, RecommendOptions};

#[derive(Parser)]
#[command(
    name = "huddle",
    version,
    about = "Pick the meeting slot the most people can attend"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend the slot(s) with maximal attendance for an event
    Recommend {
        /// Event snapshot JSON file
        #[arg(short, long)]
        event: String,
        /// Availability records JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        availability: Option<String>,
        /// Drop repeat submissions of the same user for the same slot
        #[arg(long)]
        dedupe: bool,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            event,
            availability,
            dedupe,
            output,
        } => {
            let event: Event = serde_json::from_str(&read_input(Some(&event))?)
                .context("Failed to parse event JSON")?;
            let availabilities: Vec<Availability> =
                serde_json::from_str(&read_input(availability.as_deref())?)
                    .context("Failed to parse availability JSON")?;

            let options = RecommendOptions {
                dedupe_users_per_slot: dedupe,
            };
            let recommendation = recommend(&event, &availabilities, options);

            let pretty = serde_json::to_string_pretty(&recommendation)?;
            write_output(output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
