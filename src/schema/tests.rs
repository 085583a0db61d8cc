use super::*;
use arrow::datatypes::DataType;

#[test]
fn test_sample_schema_columns() {
    let schema = create_sample_schema();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(
        names,
        vec![
            "potential",
            "current",
            "time",
            "cycle",
            "redox",
            "source_row",
            "instrument",
            "scan_rate",
            "ph",
            "temperature"
        ]
    );

    let potential = schema.field_with_name(columns::POTENTIAL).unwrap();
    assert_eq!(potential.data_type(), &DataType::Float64);
    assert!(!potential.is_nullable());
    assert_eq!(potential.metadata().get("unit").map(String::as_str), Some("V"));

    assert!(schema.field_with_name(columns::PH).unwrap().is_nullable());
}

#[test]
fn test_charge_schemas() {
    assert_eq!(create_charge_schema().fields().len(), 5);
    assert_eq!(create_averaged_charge_schema().fields().len(), 7);

    let max = create_max_charge_schema();
    assert!(max.field_with_name("type").is_ok());
    assert!(max.field_with_name(columns::T_MIN).is_ok());
}

#[test]
fn test_table_kind_schema() {
    assert_eq!(TableKind::Charges.schema().as_ref(), &create_charge_schema());
    assert_eq!(TableKind::MaxCharges.as_str(), "max_charges");
}
