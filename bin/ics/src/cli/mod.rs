pub mod assess;
pub mod eligibility;
pub mod verbosity;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    assess::AssessConfig,
    eligibility::EligibilityConfig,
    verbosity::{Verbosity, verbosity_parser},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level, 0 (off) to 5 (trace)
    #[arg(short, long, global = true, default_value_t = Verbosity::Info, value_parser = verbosity_parser)]
    pub verbosity: Verbosity,

    #[arg(
        long,
        global = true,
        env = "ICS_DATA_DIR",
        help = "The directory outputs are written to when no explicit output path is given"
    )]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the node operators that sustained good performance for the required window
    #[command(name = "eligibility")]
    Eligibility(Box<EligibilityConfig>),

    /// Resolve the final decision from per-category points
    #[command(name = "assess")]
    Assess(AssessConfig),
}
