//! Kinship CLI
//!
//! Loads a family snapshot (plus any inline members) and answers
//! relationship queries against it.

mod commands;
mod config;
mod state;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use kinship::generator::FamilyShape;

use crate::config::{OutputFormat, Settings};
use crate::state::{AppState, MemberSpec};

#[derive(Parser, Debug)]
#[command(name = "kinship")]
#[command(about = "Resolve degree-of-kinship titles between family members")]
struct Cli {
    /// Configuration file (replaces config/default.toml and config/local.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Family snapshot JSON to load
    #[arg(short, long, global = true)]
    family: Option<PathBuf>,

    /// Inline member NAME:GENDER[:PARENT[:SPOUSE]], applied after the family file
    #[arg(short = 'm', long = "member", global = true)]
    members: Vec<MemberSpec>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List members in registration order
    List,
    /// Show one member record
    Show { name: String },
    /// Ancestor chain from a member up to its root
    Chain { name: String },
    /// Title of REFERENCE as seen from TARGET
    Title { reference: String, target: String },
    /// Label every member relative to REFERENCE
    Labels { reference: String },
    /// Spouse pairs, one line per couple
    Spouses,
    /// Generic degree-of-kinship reference grid
    Table {
        #[arg(long)]
        max_degree: Option<u32>,
    },
    /// Print the effective configuration
    Config,
    /// Print a randomly generated family snapshot
    Generate {
        #[arg(long, default_value = "3")]
        generations: u32,
        #[arg(long, default_value = "3")]
        children: u32,
        /// Random seed (uses entropy if not specified)
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Time bulk labelling on a generated family
    Bench {
        #[arg(long, default_value = "6")]
        generations: u32,
        #[arg(long, default_value = "3")]
        children: u32,
        #[arg(long, default_value = "10")]
        references: u32,
    },
}

fn init_tracing(settings: &Settings) -> Result<()> {
    let level: Level = settings
        .logging
        .level
        .parse()
        .with_context(|| format!("invalid log level {:?}", settings.logging.level))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(format) = cli.format {
        settings.output.format = format;
    }
    if let Some(family) = cli.family {
        settings.family.path = Some(family);
    }

    init_tracing(&settings)?;

    let shape = |generations, max_children| FamilyShape {
        generations,
        max_children,
        ..FamilyShape::default()
    };

    let state = AppState::load(settings, &cli.members)?;

    match cli.command {
        Command::List => commands::members::list(&state),
        Command::Show { name } => commands::members::show(&state, &name),
        Command::Chain { name } => commands::members::chain(&state, &name),
        Command::Title { reference, target } => {
            commands::relations::title(&state, &reference, &target)
        }
        Command::Labels { reference } => commands::relations::labels(&state, &reference),
        Command::Spouses => commands::relations::spouses(&state),
        Command::Table { max_degree } => commands::table::table(&state, max_degree),
        Command::Config => commands::config::get_config(&state),
        Command::Bench { generations, children, references } => {
            commands::family::bench(&state, shape(generations, children), references)
        }
        Command::Generate { generations, children, seed } => {
            commands::family::generate(shape(generations, children), seed)
        }
    }
}
