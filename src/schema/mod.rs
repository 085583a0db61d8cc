//! # Table Schema Definition
//!
//! Apache Arrow schemas for every tabular result the toolkit exports.
//!
//! ## Sample Table
//!
//! | Column | Type | Description |
//! |--------|------|-------------|
//! | potential | Float64 | Potential in V |
//! | current | Float64 | Current in A |
//! | time | Float64 | Time in s |
//! | cycle | UInt32 | Reconstructed cycle |
//! | redox | Utf8 | "oxidation" or "reduction" |
//! | source_row | UInt64 | Row in the raw export |
//! | instrument | Utf8 (nullable) | Instrument name |
//! | scan_rate | Float64 (nullable) | Scan rate in mV/s |
//! | ph | Float64 (nullable) | Electrolyte pH |
//! | temperature | Float64 (nullable) | Electrolyte temperature in K |
//!
//! ## Charge Tables
//!
//! Per-cycle charges carry `cycle`, `redox`, `anodic_charge`,
//! `cathodic_charge` and `total_charge`. The averaged table replaces `cycle`
//! with `cycles` and adds `anodic_charge_err` / `cathodic_charge_err`. The
//! maximum-charge table carries `section`, `type`, `t_min`, `t_max` and
//! `total_charge`.

mod builders;
/// Column name constants.
pub mod columns;
mod constants;

#[cfg(test)]
mod tests;

pub use builders::{
    create_averaged_charge_schema, create_charge_schema, create_max_charge_schema,
    create_sample_schema, TableKind,
};
pub use constants::*;
