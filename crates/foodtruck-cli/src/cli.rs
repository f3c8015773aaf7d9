use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use foodtruck_catalog::LocationId;

#[derive(Parser)]
#[command(
    name = "foodtrucks",
    about = "Food truck catalog: load records and query by location or block",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON seed file to load before running the command (repeatable)
    #[arg(short, long, global = true)]
    pub seed: Vec<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the seed files and report what was stored
    Import(ImportArgs),
    /// Show the food truck at a location
    Get(GetArgs),
    /// List the food trucks in a block
    Block(BlockArgs),
    /// Show the number of loaded food trucks
    Count,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Stop at the first rejected record
    #[arg(long)]
    pub fail_fast: bool,
}

#[derive(Args)]
pub struct GetArgs {
    #[arg(allow_negative_numbers = true)]
    pub location_id: LocationId,
}

#[derive(Args)]
pub struct BlockArgs {
    pub block: String,
}
