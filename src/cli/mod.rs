use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

use echem_analytics::ingest::InstrumentSource;
use echem_analytics::voltammetry::CyclicVoltammogram;

mod charge;
mod config;
mod export;
mod hills;
mod info;

use config::Config;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "echem.toml";

/// echem - cyclic voltammetry charge analysis
#[derive(Parser)]
#[command(name = "echem")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Load settings from a TOML config file (default: ./echem.toml if present)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Input selection and wrangling overrides shared by the analysis commands
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Instrument export file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Export format (biologic, aftermath)
    #[arg(short, long, default_value = "biologic")]
    source: InstrumentSource,

    /// Treat INPUT as a base64 upload (data: URL or bare payload)
    #[arg(long)]
    base64: bool,

    /// Scan rate in mV/s, used when the export has no time column
    #[arg(long, value_name = "MV_PER_S")]
    scan_rate: Option<f64>,

    /// Keep the instrument's first cycle
    #[arg(long)]
    keep_first_cycle: bool,

    /// Rows after the first retained row to discard as start-up transient
    #[arg(long, value_name = "ROWS")]
    skip_window: Option<usize>,

    /// Drop a reconstructed cycle before integrating (repeatable)
    #[arg(short, long = "drop-cycle", value_name = "N")]
    drop_cycles: Vec<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Integrate the charge passed per cycle and sweep direction
    Charge {
        #[command(flatten)]
        input: InputArgs,

        /// Average over cycles per sweep direction
        #[arg(short, long)]
        average: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Integrate every maximal run of same-sign current
    MaxCharge {
        #[command(flatten)]
        input: InputArgs,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write samples and charge tables to Parquet
    Export {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: PathBuf,

        /// Compression level for ZSTD (1-22)
        #[arg(short = 'c', long)]
        compression_level: Option<i32>,

        /// Maximum rows per row group
        #[arg(short = 'r', long)]
        row_group_size: Option<usize>,
    },

    /// Display footer metadata and schema of an exported table
    Info {
        /// Parquet file written by `echem export`
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Summarize hill deposition per walker in a PLUMED HILLS file
    Hills {
        /// HILLS file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Decimal places used to match walkers' deposition times
        #[arg(long, default_value_t = 2)]
        round_time: u32,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Charge {
            input,
            average,
            json,
        } => charge::run_charge(&input, &config, average, json),
        Commands::MaxCharge { input, json } => charge::run_max_charge(&input, &config, json),
        Commands::Export {
            input,
            output_dir,
            compression_level,
            row_group_size,
        } => export::run(&input, &config, output_dir, compression_level, row_group_size),
        Commands::Info { file } => info::run(file),
        Commands::Hills {
            file,
            round_time,
            json,
        } => hills::run(file, round_time, json),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path),
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            info!("Using {}", DEFAULT_CONFIG_FILE);
            Config::from_file(Path::new(DEFAULT_CONFIG_FILE))
        }
        None => Ok(Config::default()),
    }
}

/// Load and wrangle the input, applying config values and then CLI overrides
pub(crate) fn load_voltammogram(args: &InputArgs, config: &Config) -> Result<CyclicVoltammogram> {
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let mut metadata = config.experiment.clone();
    if let Some(scan_rate) = args.scan_rate {
        metadata.scan_rate = Some(scan_rate);
    }
    if metadata.instrument.is_none() {
        metadata.instrument = Some(args.source.to_string());
    }

    let mut wrangle = config.wrangle.clone();
    if args.keep_first_cycle {
        wrangle.keep_first_cycle = true;
    }
    if let Some(rows) = args.skip_window {
        wrangle.skip_window = rows;
    }

    let mut cv = if args.base64 {
        let contents = std::fs::read_to_string(&args.input)
            .with_context(|| format!("Failed to read {}", args.input.display()))?;
        CyclicVoltammogram::from_base64(contents.trim(), args.source, metadata, wrangle)
    } else {
        match args.source {
            InstrumentSource::Biologic => {
                CyclicVoltammogram::from_biologic_path(&args.input, metadata, wrangle)
            }
            InstrumentSource::Aftermath => {
                CyclicVoltammogram::from_aftermath_path(&args.input, metadata, wrangle)
            }
        }
    }
    .with_context(|| format!("Failed to load {}", args.input.display()))?;

    if !args.drop_cycles.is_empty() {
        cv.drop_cycles(&args.drop_cycles);
    }
    info!(
        "{} samples in cycles {:?}",
        cv.wrangled_data().len(),
        cv.cycles()
    );
    Ok(cv)
}

#[cfg(feature = "colorized_output")]
pub(crate) fn heading(text: &str) -> String {
    console::style(text).bold().cyan().to_string()
}

#[cfg(not(feature = "colorized_output"))]
pub(crate) fn heading(text: &str) -> String {
    text.to_string()
}
