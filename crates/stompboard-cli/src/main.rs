//! Stompboard CLI - Command-line interface for pedal 3D model generation
//!
//! This binary provides commands for creating and validating pedal records,
//! generating model descriptions from them, and laying models out on a board.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use stompboard_cli::commands;
use stompboard_cli::commands::add::AddOptions;
use stompboard_spec::DEFAULT_BOARD_SPACING;

/// Stompboard - Procedural 3D models for guitar effects pedals
#[derive(Parser)]
#[command(name = "stompboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate models for every pedal record in a directory
    GenerateAll {
        /// Directory containing pedal records (default: $STOMPBOARD_PEDALS_DIR or ./pedals)
        #[arg(short, long)]
        pedals_dir: Option<String>,

        /// Output directory for models (default: $STOMPBOARD_MODELS_DIR or ./src/models/pedals)
        #[arg(short, long)]
        models_dir: Option<String>,

        /// Write a JSON summary report to this path
        #[arg(short, long)]
        summary: Option<String>,

        /// Show one line per record
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate the model for a single pedal record
    Generate {
        /// Path to the pedal record
        #[arg(short, long)]
        record: String,

        /// Output directory for the model
        #[arg(short, long)]
        models_dir: Option<String>,

        /// Print the model to stdout instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Validate a pedal record
    Validate {
        /// Path to the pedal record
        #[arg(short, long)]
        record: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show and validate a generated model
    Inspect {
        /// Path to the model file
        #[arg(short, long)]
        model: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Create a new pedal record
    Add {
        /// Pedal name (e.g., "SY-1")
        #[arg(long)]
        name: String,

        /// Manufacturer (e.g., "Boss")
        #[arg(long)]
        manufacturer: String,

        /// Pedal category (fuzz, delay, reverb, ...; default: other)
        #[arg(long = "type")]
        pedal_type: Option<String>,

        /// Comma-separated control labels, in panel order
        #[arg(long)]
        controls: Option<String>,

        /// Dimensions in inches, e.g. "4.77\" x 2.6\" x 1.39\""
        #[arg(long)]
        dimensions: Option<String>,

        /// Weight, free text
        #[arg(long)]
        weight: Option<String>,

        /// Current draw in mA
        #[arg(long)]
        milli_amps: Option<f64>,

        /// Supply voltage
        #[arg(long)]
        voltage: Option<f64>,

        /// Price
        #[arg(long)]
        price: Option<f64>,

        /// Description
        #[arg(long)]
        description: Option<String>,

        /// Image URL
        #[arg(long)]
        image_url: Option<String>,

        /// Bypass type (default: "True Bypass")
        #[arg(long)]
        bypass: Option<String>,

        /// Release year
        #[arg(long)]
        year: Option<u32>,

        /// Directory for pedal records
        #[arg(short, long)]
        pedals_dir: Option<String>,

        /// Replace an existing record with the same slug
        #[arg(short, long)]
        force: bool,
    },

    /// Lay generated pedals out in a row
    Board {
        /// Pedal slug to place; repeat for more (default: every model)
        #[arg(long = "slug")]
        slugs: Vec<String>,

        /// Directory holding generated models
        #[arg(short, long)]
        models_dir: Option<String>,

        /// Center-to-center spacing in mm
        #[arg(long, default_value_t = DEFAULT_BOARD_SPACING)]
        spacing: f64,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::GenerateAll {
            pedals_dir,
            models_dir,
            summary,
            verbose,
        } => commands::generate_all::run(
            pedals_dir.as_deref(),
            models_dir.as_deref(),
            summary.as_deref(),
            verbose,
        ),
        Commands::Generate {
            record,
            models_dir,
            stdout,
        } => commands::generate::run(&record, models_dir.as_deref(), stdout),
        Commands::Validate { record, json } => commands::validate::run(&record, json),
        Commands::Inspect { model, json } => commands::inspect::run(&model, json),
        Commands::Add {
            name,
            manufacturer,
            pedal_type,
            controls,
            dimensions,
            weight,
            milli_amps,
            voltage,
            price,
            description,
            image_url,
            bypass,
            year,
            pedals_dir,
            force,
        } => commands::add::run(&AddOptions {
            name,
            manufacturer,
            pedal_type,
            controls,
            dimensions,
            weight,
            milli_amps,
            voltage,
            price,
            description,
            image_url,
            bypass,
            year,
            pedals_dir,
            force,
        }),
        Commands::Board {
            slugs,
            models_dir,
            spacing,
            output,
        } => commands::board::run(&slugs, models_dir.as_deref(), spacing, output.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
