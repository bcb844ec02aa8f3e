// Mon Oct 19 2026 - Alex

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "melee-state-decoder")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Decodes watched Melee memory into structured game state", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the watched address list, one address per line
    Locations(LocationsArgs),
    /// Apply observations to a fresh state and print it as JSON
    Decode(DecodeArgs),
    /// Show the handlers bound to an address
    Inspect(InspectArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct PlayerSelection {
    /// Player slots to register, e.g. `0,1`
    #[arg(short, long, value_delimiter = ',')]
    pub players: Option<Vec<u8>>,
}

#[derive(Parser, Debug)]
pub struct LocationsArgs {
    /// Output file; `-` for stdout. Defaults to the configured locations file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub selection: PlayerSelection,
}

#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// Observation file (`<address> <hex value>` per line); stdin when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub pretty: bool,

    /// Stop at the first observation that cannot be applied
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub selection: PlayerSelection,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub address: String,

    #[command(flatten)]
    pub selection: PlayerSelection,
}
