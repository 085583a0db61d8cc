//! # echem
//!
//! Command-line front end for cyclic voltammetry charge analysis.
//!
//! ## Usage
//!
//! ```bash
//! # Charge passed per cycle from a BioLogic export
//! echem charge run.txt
//!
//! # Averaged over cycles, AfterMath export without a time column
//! echem charge run.csv --source aftermath --scan-rate 50 --average
//!
//! # Write Parquet tables
//! echem export run.txt results/
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
