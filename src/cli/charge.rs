use anyhow::{Context, Result};

use echem_analytics::voltammetry::MaxChargeSection;

use super::config::Config;
use super::{heading, load_voltammogram, InputArgs};

pub fn run_charge(input: &InputArgs, config: &Config, average: bool, json: bool) -> Result<()> {
    let cv = load_voltammogram(input, config)?;
    let report = cv.get_charge_passed(average);

    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize charges")?;
        println!("{}", text);
        return Ok(());
    }

    if report.is_empty() {
        println!("No interior cycles to integrate (cycles present: {:?})", cv.cycles());
        return Ok(());
    }

    let title = if average {
        "Averaged charge passed"
    } else {
        "Charge passed per cycle"
    };
    println!("{}", heading(title));
    print!("{}", report);
    Ok(())
}

pub fn run_max_charge(input: &InputArgs, config: &Config, json: bool) -> Result<()> {
    let cv = load_voltammogram(input, config)?;
    let sections = cv.get_maximum_charges_passed();

    if json {
        let text =
            serde_json::to_string_pretty(&sections).context("Failed to serialize sections")?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}", heading("Maximum charge passed"));
    print_sections(&sections);
    Ok(())
}

fn print_sections(sections: &[MaxChargeSection]) {
    println!(
        "{:>7}  {:<8}  {:>10}  {:>10}  {:>14}",
        "section", "type", "t_min (s)", "t_max (s)", "charge (C)"
    );
    for section in sections {
        println!(
            "{:>7}  {:<8}  {:>10.3}  {:>10.3}  {:>14.6e}",
            section.section, section.kind, section.t_min, section.t_max, section.total_charge
        );
    }
}
