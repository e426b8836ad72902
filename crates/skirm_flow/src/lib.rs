//! Entry point that parses the command line arguments
//! and provides a shared way for interfaces to handle the start flow.

use clap::{Parser, Subcommand};
use skirm_core::rules::ResistType;

pub enum StartFlow {
    /// Decode a terrain file and report every record.
    Inspect { name: String, path: String },
    /// Roll damage samples for a resist type.
    Sample {
        resist: ResistType,
        power: i32,
        rolls: u32,
    },
}

impl StartFlow {
    pub fn from_args() -> StartFlow {
        FlowArgs::parse().into()
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct FlowArgs {
    #[command(subcommand)]
    command: FlowCommand,
}

#[derive(Subcommand, Debug)]
enum FlowCommand {
    /// Print the decoded records of a terrain file
    Inspect {
        /// Path to the terrain file
        path: String,
        /// Set name, defaults to the file stem
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Print damage roll statistics for a resist type
    Sample {
        /// Resist type name (ap, he, in, laser, ...)
        resist: String,
        #[arg(short, long, default_value_t = 100)]
        power: i32,
        #[arg(short, long, default_value_t = 1000)]
        rolls: u32,
    },
}

impl From<FlowArgs> for StartFlow {
    fn from(value: FlowArgs) -> Self {
        match value.command {
            FlowCommand::Inspect { path, name } => {
                let name = name.unwrap_or_else(|| {
                    std::path::Path::new(&path)
                        .file_stem()
                        .map(|stem| stem.to_string_lossy().to_string())
                        .unwrap_or_else(|| path.clone())
                });
                StartFlow::Inspect { name, path }
            }
            FlowCommand::Sample {
                resist,
                power,
                rolls,
            } => {
                let Some(resist) = ResistType::from_name(&resist) else {
                    eprintln!("unknown resist type: {}", resist);
                    std::process::exit(2);
                };
                StartFlow::Sample {
                    resist,
                    power,
                    rolls,
                }
            }
        }
    }
}
