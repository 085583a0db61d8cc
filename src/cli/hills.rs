use anyhow::{Context, Result};
use std::path::PathBuf;

use echem_analytics::hills::HillsFile;

use super::heading;

pub fn run(file: PathBuf, round_time: u32, json: bool) -> Result<()> {
    let hills = HillsFile::from_path(&file)
        .with_context(|| format!("Failed to read HILLS file {}", file.display()))?;
    let walkers = hills
        .walker_series(round_time)
        .context("Failed to split walkers")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&walkers).context("Failed to serialize walkers")?
        );
        return Ok(());
    }

    println!("{}", heading("HILLS summary"));
    println!("Fields: {}", hills.fields().join(" "));
    for (key, value) in hills.constants() {
        println!("SET {} = {}", key, value);
    }
    println!();
    println!(
        "{:>6}  {:>7}  {:>12}  {:>12}  {:>12}",
        "walker", "hills", "t_last", "mean height", "last height"
    );
    for (walker, series) in &walkers {
        let count = series.height.len();
        let mean = series.height.iter().sum::<f64>() / count.max(1) as f64;
        println!(
            "{:>6}  {:>7}  {:>12.3}  {:>12.4e}  {:>12.4e}",
            walker,
            count,
            series.time.last().copied().unwrap_or(f64::NAN),
            mean,
            series.height.last().copied().unwrap_or(f64::NAN)
        );
    }
    Ok(())
}
