use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// DEM elevation query CLI tool
#[derive(Parser)]
#[command(name = "relief")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the EGM96 geoid grid file (.grd, or .zip containing one)
    #[arg(short, long, env = "RELIEF_GEOID", global = true)]
    geoid: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse free-form coordinate text into decimal degrees
    Parse {
        /// Latitude text (decimal degrees, packed DMS, or delimited DMS)
        #[arg(allow_hyphen_values = true)]
        lat: String,

        /// Longitude text
        #[arg(allow_hyphen_values = true)]
        lon: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Look up the EGM96 geoid height at a coordinate
    Height {
        /// Latitude text (any format the parser accepts)
        #[arg(allow_hyphen_values = true)]
        lat: String,

        /// Longitude text
        #[arg(allow_hyphen_values = true)]
        lon: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Display information about a geoid grid file
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { lat, lon, json } => commands::parse::run(&lat, &lon, json),
        Commands::Height { lat, lon, json } => commands::height::run(cli.geoid, &lat, &lon, json),
        Commands::Info => commands::info::run(cli.geoid),
    }
}
