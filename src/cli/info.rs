use anyhow::{Context, Result};
use std::path::PathBuf;

use echem_analytics::writer::TableSummary;

use super::heading;

pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let summary = TableSummary::from_path(&file)
        .with_context(|| format!("Failed to read Parquet file {}", file.display()))?;

    println!("{}", heading("Table Information"));
    println!("File:           {}", file.display());
    print!("{}", summary);

    let metadata = summary
        .experiment_metadata()
        .context("Failed to parse experiment metadata")?;
    println!();
    println!("Experiment:");
    println!(
        "{}",
        serde_json::to_string_pretty(&metadata).context("Failed to format metadata")?
    );

    Ok(())
}
