//! Integration tests for echem-analytics
//!
//! These tests run the full pipeline on instrument fixtures, from export file
//! to charge tables and Parquet output.

use base64::Engine;
use echem_analytics::ingest::{IngestError, InstrumentSource};
use echem_analytics::metadata::{Electrolyte, ExperimentMetadata};
use echem_analytics::schema::TableKind;
use echem_analytics::voltammetry::{
    ChargeKind, CyclicVoltammogram, Redox, VoltammetryError, WrangleConfig,
};
use echem_analytics::writer::{
    charges_to_record_batch, samples_to_record_batch, sections_to_record_batch, TableSummary,
    TableWriter, WriterConfig,
};
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn biologic_cv() -> CyclicVoltammogram {
    let metadata = ExperimentMetadata::new()
        .with_electrolyte(Electrolyte::new("Na+", "Cl-", 7.0, 298.15))
        .with_instrument("BioLogic");
    CyclicVoltammogram::from_biologic_path(
        fixture("biologic_cv.txt"),
        metadata,
        WrangleConfig::default(),
    )
    .unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= 1e-10 * expected.abs(),
        "expected {expected}, got {actual}"
    );
}

/// Regression baselines for the BioLogic fixture: (cycle, redox, anodic, cathodic, total).
///
/// These come from a separate implementation of the same pipeline, not from
/// an external package, so they pin behaviour against drift. The integration
/// rule itself is checked against closed forms and published scipy values in
/// `voltammetry::integrate`.
const BIOLOGIC_CHARGES: [(u32, Redox, f64, f64, f64); 8] = [
    (1, Redox::Oxidation, 0.02415942876618454, 0.0035245158879735564, 0.027683944654158098),
    (1, Redox::Reduction, 0.003305817340629709, 0.02102816645691507, 0.024333983797544777),
    (2, Redox::Oxidation, 0.023878424023973818, 0.003386518039041681, 0.0272649420630155),
    (2, Redox::Reduction, 0.003509099540619372, 0.020812681500487124, 0.024321781041106494),
    (3, Redox::Oxidation, 0.024654538600980092, 0.0036020972694290093, 0.0282566358704091),
    (3, Redox::Reduction, 0.0033874083935765058, 0.021548941455198305, 0.02493634984877481),
    (4, Redox::Oxidation, 0.024916849328896092, 0.0031861206273548688, 0.028102969956250962),
    (4, Redox::Reduction, 0.0030710109096144093, 0.021733360282586357, 0.024804371192200768),
];

/// Test per-cycle charges against the regression baselines
#[test]
fn test_biologic_charge_regression() {
    let cv = biologic_cv();
    let charges = cv.charge_passed();
    assert_eq!(charges.len(), BIOLOGIC_CHARGES.len());

    for (entry, &(cycle, redox, anodic, cathodic, total)) in charges.iter().zip(&BIOLOGIC_CHARGES) {
        assert_eq!(entry.cycle, cycle);
        assert_eq!(entry.redox, redox);
        assert_close(entry.anodic_charge, anodic);
        assert_close(entry.cathodic_charge, cathodic);
        assert_close(entry.total_charge, total);
    }
}

/// Test averaged charges against the regression baselines
#[test]
fn test_biologic_averaged_regression() {
    let cv = biologic_cv();
    let averaged = cv.averaged_charge_passed();
    assert_eq!(averaged.len(), 2);

    let (ox, red) = (&averaged[0], &averaged[1]);
    assert_eq!(ox.redox, Redox::Oxidation);
    assert_close(ox.anodic_charge, 0.024402310180008636);
    assert_close(ox.anodic_charge_err, 0.0002348435290694834);
    assert_close(ox.cathodic_charge, 0.0034248129559497787);
    assert_close(ox.cathodic_charge_err, 9.120075422339752e-05);

    assert_eq!(red.redox, Redox::Reduction);
    assert_close(red.anodic_charge, 0.003318334046109999);
    assert_close(red.anodic_charge_err, 9.241579100971948e-05);
    assert_close(red.cathodic_charge, 0.021280787423796715);
    assert_close(red.cathodic_charge_err, 0.00021596089256616522);
    assert_close(red.total_charge, red.anodic_charge + red.cathodic_charge);
}

/// Test maximum-charge sections against the regression baselines
#[test]
fn test_biologic_max_charge_regression() {
    let cv = biologic_cv();
    let sections = cv.get_maximum_charges_passed();
    assert_eq!(sections.len(), 11);

    let expected_t_max = [
        54.86247496687937,
        74.91959358035614,
        94.92727352551138,
        114.96340410369265,
        134.80743658190102,
        154.71157131248304,
        174.60706779421452,
        194.6848516088592,
        214.67501093811535,
        234.676293419186,
        239.0236690681275,
    ];
    let expected_charge = [
        0.014572431882012031,
        0.027485312911304963,
        0.02746524610681425,
        0.027314375346639767,
        0.027387523564593192,
        0.027695926366976806,
        0.028041946994556602,
        0.028112474759452603,
        0.027987860238510503,
        0.02790452851774354,
        0.0021114391315431844,
    ];

    for (i, section) in sections.iter().enumerate() {
        assert_eq!(section.section, i);
        let kind = if i % 2 == 0 { ChargeKind::Anodic } else { ChargeKind::Cathodic };
        assert_eq!(section.kind, kind);
        assert_close(section.t_max, expected_t_max[i]);
        assert_close(section.total_charge, expected_charge[i]);
        if i > 0 {
            assert_eq!(section.t_min, sections[i - 1].t_max);
        }
    }
    assert_close(sections[0].t_min, 46.09017883476488);
}

/// Test an AfterMath export without time or cycle columns
#[test]
fn test_aftermath_derived_time_and_cycles() {
    let metadata = ExperimentMetadata::new().with_scan_rate(50.0);
    let cv = CyclicVoltammogram::from_aftermath_path(
        fixture("aftermath_cv.csv"),
        metadata,
        WrangleConfig::default(),
    )
    .unwrap();

    assert_eq!(cv.wrangled_data().len(), 208);
    assert_eq!(cv.cycles(), (0..=6).collect::<Vec<u32>>());

    let charges = cv.charge_passed();
    assert_eq!(charges.len(), 9);
    assert_eq!((charges[0].cycle, charges[0].redox), (1, Redox::Oxidation));
    assert_close(charges[0].anodic_charge, 0.02389341635081329);
    assert_close(charges[0].cathodic_charge, 0.0035794518245355895);
    assert_close(charges[0].total_charge, 0.02747286817534888);
    assert_close(charges[1].cathodic_charge, 0.020813464846904016);

    let last = charges[8];
    assert_eq!((last.cycle, last.redox), (5, Redox::Oxidation));
    assert_close(last.anodic_charge, 0.001240005670875106);
    assert_close(last.total_charge, 0.004490773717668178);
}

/// Test that an AfterMath export without time needs a scan rate
#[test]
fn test_aftermath_without_scan_rate_fails() {
    let result = CyclicVoltammogram::from_aftermath_path(
        fixture("aftermath_cv.csv"),
        ExperimentMetadata::new(),
        WrangleConfig::default(),
    );
    assert!(matches!(
        result,
        Err(VoltammetryError::Ingest(IngestError::MissingScanRate))
    ));
}

/// Test that a base64 upload gives the same result as the file on disk
#[test]
fn test_base64_upload_matches_file() {
    let contents = std::fs::read(fixture("biologic_cv.txt")).unwrap();
    let url = format!(
        "data:text/plain;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(&contents)
    );

    let metadata = biologic_cv().metadata().clone();
    let uploaded = CyclicVoltammogram::from_base64(
        &url,
        InstrumentSource::Biologic,
        metadata,
        WrangleConfig::default(),
    )
    .unwrap();

    assert_eq!(uploaded, biologic_cv());
}

/// Test that a missing file surfaces as an I/O error
#[test]
fn test_missing_file() {
    let result = CyclicVoltammogram::from_biologic_path(
        fixture("does_not_exist.txt"),
        ExperimentMetadata::new(),
        WrangleConfig::default(),
    );
    assert!(matches!(
        result,
        Err(VoltammetryError::Ingest(IngestError::IoError(_)))
    ));
}

/// Test dropping cycles and re-integrating
#[test]
fn test_drop_cycles_then_integrate() {
    let mut cv = biologic_cv();
    cv.drop_cycles(&[1, 3]);

    assert_eq!(cv.cycles(), vec![0, 2, 4, 5]);
    let charges = cv.charge_passed();
    let cycles: Vec<u32> = charges.iter().map(|c| c.cycle).collect();
    assert_eq!(cycles, vec![2, 2, 4, 4]);
    assert_close(charges[0].anodic_charge, BIOLOGIC_CHARGES[2].2);

    let averaged = cv.averaged_charge_passed();
    assert!(averaged.iter().all(|a| a.cycles == 2));
}

/// Test that wrangling is deterministic
#[test]
fn test_pipeline_is_deterministic() {
    let first = biologic_cv();
    let second = biologic_cv();
    assert_eq!(first.wrangled_data(), second.wrangled_data());
    assert_eq!(first.charge_passed(), second.charge_passed());
    assert_eq!(
        first.get_maximum_charges_passed(),
        second.get_maximum_charges_passed()
    );
}

/// Test the complete export of result tables to Parquet
#[test]
fn test_export_tables() {
    let cv = biologic_cv();
    let dir = tempdir().unwrap();

    let tables = [
        (
            TableKind::Samples,
            samples_to_record_batch(cv.wrangled_data(), cv.metadata()).unwrap(),
        ),
        (
            TableKind::Charges,
            charges_to_record_batch(&cv.charge_passed()).unwrap(),
        ),
        (
            TableKind::MaxCharges,
            sections_to_record_batch(&cv.get_maximum_charges_passed()).unwrap(),
        ),
    ];

    for (kind, batch) in &tables {
        let path = dir.path().join(format!("{}.parquet", kind.as_str()));
        let mut writer =
            TableWriter::new_file(&path, *kind, cv.metadata(), WriterConfig::default()).unwrap();
        writer.write_batch(batch).unwrap();
        let stats = writer.finish().unwrap();
        assert_eq!(stats.rows_written, batch.num_rows());

        let summary = TableSummary::from_path(&path).unwrap();
        assert_eq!(summary.num_rows as usize, batch.num_rows());
        assert_eq!(summary.table_kind(), Some(kind.as_str()));
        assert_eq!(&summary.experiment_metadata().unwrap(), cv.metadata());
    }
}

/// Test reading a multi-walker HILLS file from disk
#[test]
fn test_hills_file_from_disk() {
    use echem_analytics::hills::HillsFile;
    use std::io::Write;

    let dir = tempdir().unwrap();
    let path = dir.path().join("HILLS");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "#! FIELDS time d1 sigma_d1 height biasf").unwrap();
    writeln!(file, "#! SET multivariate false").unwrap();
    for step in 1..=3 {
        for walker in 0..2 {
            let time = step as f64 + walker as f64 * 1e-4;
            writeln!(file, "{time:.4} 0.{step} 0.05 {:.2} 10", 1.0 / step as f64).unwrap();
        }
    }
    drop(file);

    let hills = HillsFile::from_path(&path).unwrap();
    assert_eq!(hills.len(), 6);
    assert_eq!(hills.fields()[3], "height");

    let walkers = hills.walker_series(2).unwrap();
    assert_eq!(walkers.len(), 2);
    assert_eq!(walkers[&0].time, vec![1.0, 2.0, 3.0]);
    assert_eq!(walkers[&1].height, vec![1.0, 0.5, 0.33]);
}
