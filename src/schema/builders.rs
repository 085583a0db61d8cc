use std::collections::HashMap;
use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaBuilder};

use super::columns;

/// Creates a Field annotated with its physical unit
fn field_with_unit(name: &str, data_type: DataType, nullable: bool, unit: &str) -> Field {
    let mut metadata = HashMap::new();
    metadata.insert("unit".to_string(), unit.to_string());
    Field::new(name, data_type, nullable).with_metadata(metadata)
}

/// Schema of the wrangled sample table.
///
/// One row per sample; boundary samples appear twice, once per redox segment.
/// The trailing metadata columns repeat the experiment context on every row.
///
/// # Example
///
/// ```
/// use echem_analytics::schema::create_sample_schema;
///
/// let schema = create_sample_schema();
/// assert_eq!(schema.fields().len(), 10);
/// ```
pub fn create_sample_schema() -> Schema {
    let mut builder = SchemaBuilder::new();

    builder.push(field_with_unit(columns::POTENTIAL, DataType::Float64, false, "V"));
    builder.push(field_with_unit(columns::CURRENT, DataType::Float64, false, "A"));
    builder.push(field_with_unit(columns::TIME, DataType::Float64, false, "s"));
    builder.push(Field::new(columns::CYCLE, DataType::UInt32, false));
    builder.push(Field::new(columns::REDOX, DataType::Utf8, false));
    builder.push(Field::new(columns::SOURCE_ROW, DataType::UInt64, false));

    // Experiment context
    builder.push(Field::new(columns::INSTRUMENT, DataType::Utf8, true));
    builder.push(field_with_unit(columns::SCAN_RATE, DataType::Float64, true, "mV/s"));
    builder.push(Field::new(columns::PH, DataType::Float64, true));
    builder.push(field_with_unit(columns::TEMPERATURE, DataType::Float64, true, "K"));

    builder.finish()
}

/// Schema of the per-cycle charge table
pub fn create_charge_schema() -> Schema {
    let mut builder = SchemaBuilder::new();

    builder.push(Field::new(columns::CYCLE, DataType::UInt32, false));
    builder.push(Field::new(columns::REDOX, DataType::Utf8, false));
    builder.push(field_with_unit(columns::ANODIC_CHARGE, DataType::Float64, false, "C"));
    builder.push(field_with_unit(columns::CATHODIC_CHARGE, DataType::Float64, false, "C"));
    builder.push(field_with_unit(columns::TOTAL_CHARGE, DataType::Float64, false, "C"));

    builder.finish()
}

/// Schema of the segment-averaged charge table
pub fn create_averaged_charge_schema() -> Schema {
    let mut builder = SchemaBuilder::new();

    builder.push(Field::new(columns::REDOX, DataType::Utf8, false));
    builder.push(field_with_unit(columns::ANODIC_CHARGE, DataType::Float64, false, "C"));
    builder.push(field_with_unit(columns::ANODIC_CHARGE_ERR, DataType::Float64, false, "C"));
    builder.push(field_with_unit(columns::CATHODIC_CHARGE, DataType::Float64, false, "C"));
    builder.push(field_with_unit(columns::CATHODIC_CHARGE_ERR, DataType::Float64, false, "C"));
    builder.push(field_with_unit(columns::TOTAL_CHARGE, DataType::Float64, false, "C"));
    builder.push(Field::new(columns::CYCLES, DataType::UInt32, false));

    builder.finish()
}

/// Schema of the maximum-charge section table
pub fn create_max_charge_schema() -> Schema {
    let mut builder = SchemaBuilder::new();

    builder.push(Field::new(columns::SECTION, DataType::UInt32, false));
    builder.push(Field::new(columns::KIND, DataType::Utf8, false));
    builder.push(field_with_unit(columns::T_MIN, DataType::Float64, false, "s"));
    builder.push(field_with_unit(columns::T_MAX, DataType::Float64, false, "s"));
    builder.push(field_with_unit(columns::TOTAL_CHARGE, DataType::Float64, false, "C"));

    builder.finish()
}

/// Which table a schema or file describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Wrangled samples
    Samples,
    /// Per-cycle charges
    Charges,
    /// Segment-averaged charges
    AveragedCharges,
    /// Maximum-charge sections
    MaxCharges,
}

impl TableKind {
    /// Name stored under the table-kind footer key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Samples => "samples",
            Self::Charges => "charges",
            Self::AveragedCharges => "averaged_charges",
            Self::MaxCharges => "max_charges",
        }
    }

    /// Arrow schema for this table, wrapped in an Arc
    pub fn schema(&self) -> Arc<Schema> {
        Arc::new(match self {
            Self::Samples => create_sample_schema(),
            Self::Charges => create_charge_schema(),
            Self::AveragedCharges => create_averaged_charge_schema(),
            Self::MaxCharges => create_max_charge_schema(),
        })
    }
}
