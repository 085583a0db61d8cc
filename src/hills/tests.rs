use super::*;

const THREE_WALKERS: &str = "\
#! FIELDS time cv sigma_cv height biasf
#! SET multivariate false
#! SET kerneltype stretched-gaussian
1.0001 0.10 0.05 1.20 10
1.0002 0.20 0.05 1.10 10
0.9999 0.30 0.05 1.00 10
# restart
#! FIELDS time cv sigma_cv height biasf
2.0000 0.15 0.05 0.90 10
2.0001 0.25 0.05 0.80 10
";

#[test]
fn test_parse_header_and_constants() {
    let hills = HillsFile::from_reader(THREE_WALKERS.as_bytes()).unwrap();
    assert_eq!(hills.fields(), ["time", "cv", "sigma_cv", "height", "biasf"]);
    assert_eq!(hills.len(), 5);
    assert_eq!(
        hills.constants().get("kerneltype").map(String::as_str),
        Some("stretched-gaussian")
    );
    assert_eq!(hills.column("cv").unwrap()[3], 0.15);
    assert!(hills.column("missing").is_none());
}

#[test]
fn test_walker_series_groups_by_rounded_time() {
    let hills = HillsFile::from_reader(THREE_WALKERS.as_bytes()).unwrap();
    let walkers = hills.walker_series(2).unwrap();

    assert_eq!(walkers.len(), 3);
    assert_eq!(walkers[&0].time, vec![1.0, 2.0]);
    assert_eq!(walkers[&0].height, vec![1.20, 0.90]);
    assert_eq!(walkers[&1].height, vec![1.10, 0.80]);
    assert_eq!(walkers[&2].height, vec![1.00]);
}

#[test]
fn test_walker_series_without_rounding_separates_times() {
    let hills = HillsFile::from_reader(THREE_WALKERS.as_bytes()).unwrap();
    let walkers = hills.walker_series(4).unwrap();
    assert_eq!(walkers.len(), 1);
    assert_eq!(walkers[&0].time.len(), 5);
}

#[test]
fn test_missing_fields_header() {
    let result = HillsFile::from_reader("1.0 2.0\n".as_bytes());
    assert!(matches!(result, Err(HillsError::MissingFields)));

    let result = HillsFile::from_reader("".as_bytes());
    assert!(matches!(result, Err(HillsError::MissingFields)));
}

#[test]
fn test_row_width_and_invalid_number() {
    let text = "#! FIELDS time height\n1.0 2.0\n1.0\n";
    let result = HillsFile::from_reader(text.as_bytes());
    assert!(matches!(
        result,
        Err(HillsError::RowWidth { line: 3, expected: 2, found: 1 })
    ));

    let text = "#! FIELDS time height\n1.0 tall\n";
    let result = HillsFile::from_reader(text.as_bytes());
    assert!(matches!(result, Err(HillsError::InvalidNumber { line: 2, .. })));
}

#[test]
fn test_inconsistent_fields() {
    let text = "#! FIELDS time height\n1.0 2.0\n#! FIELDS time cv height\n";
    let result = HillsFile::from_reader(text.as_bytes());
    assert!(matches!(result, Err(HillsError::InconsistentFields { line: 3 })));
}

#[test]
fn test_walker_series_requires_height() {
    let hills = HillsFile::from_reader("#! FIELDS time cv\n1.0 0.5\n".as_bytes()).unwrap();
    assert!(matches!(
        hills.walker_series(2),
        Err(HillsError::MissingColumn(ref c)) if c == "height"
    ));
}
