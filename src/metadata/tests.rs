use super::*;
use crate::schema::{FORMAT_VERSION, KEY_EXPERIMENT_METADATA, KEY_FORMAT_VERSION, KEY_SOFTWARE};

fn sample_metadata() -> ExperimentMetadata {
    ExperimentMetadata::new()
        .with_electrolyte(Electrolyte::new("Na+", "Cl-", 7.0, 298.0).with_solvent("H2O"))
        .with_instrument("BioLogic")
        .with_scan_rate(5.0)
}

#[test]
fn test_metadata_accessors() {
    let metadata = sample_metadata();
    assert_eq!(metadata.ph(), Some(7.0));
    assert_eq!(metadata.temperature(), Some(298.0));
    assert_eq!(metadata.scan_rate, Some(5.0));

    let empty = ExperimentMetadata::new();
    assert_eq!(empty.ph(), None);
    assert_eq!(empty.temperature(), None);
}

#[test]
fn test_metadata_json_roundtrip() {
    let metadata = sample_metadata();
    let json = metadata.to_json().unwrap();
    let restored = ExperimentMetadata::from_json(&json).unwrap();

    assert_eq!(restored, metadata);
    let electrolyte = restored.electrolyte.unwrap();
    assert_eq!(electrolyte.cation, "Na+");
    assert_eq!(electrolyte.solvent.as_deref(), Some("H2O"));
}

#[test]
fn test_metadata_json_omits_unset_fields() {
    let json = ExperimentMetadata::new().with_scan_rate(10.0).to_json().unwrap();
    assert_eq!(json, r#"{"scan_rate":10.0}"#);
}

#[test]
fn test_parquet_metadata_keys() {
    let metadata = sample_metadata();
    let kv = metadata.to_parquet_metadata().unwrap();

    assert_eq!(kv.get(KEY_FORMAT_VERSION).map(String::as_str), Some(FORMAT_VERSION));
    assert!(kv.get(KEY_SOFTWARE).unwrap().starts_with("echem-analytics v"));
    assert!(kv.contains_key(KEY_EXPERIMENT_METADATA));

    let restored = ExperimentMetadata::from_parquet_metadata(&kv).unwrap();
    assert_eq!(restored, metadata);
}

#[test]
fn test_metadata_from_toml() {
    let text = r#"
instrument = "AfterMath"
scan_rate = 50.0

[electrolyte]
cation = "K+"
anion = "OH-"
ph = 13.0
temperature = 298.15
"#;
    let metadata = ExperimentMetadata::from_toml(text).unwrap();
    assert_eq!(metadata.instrument.as_deref(), Some("AfterMath"));
    assert_eq!(metadata.ph(), Some(13.0));
    assert!(metadata.electrolyte.unwrap().solvent.is_none());

    assert!(matches!(
        ExperimentMetadata::from_toml("scan_rate = \"fast\""),
        Err(MetadataError::TomlError(_))
    ));
}
