#![no_main]

use libfuzzer_sys::fuzz_target;

use echem_analytics::ingest::{aftermath, biologic, decode_data_url};
use echem_analytics::voltammetry::CyclicVoltammogram;

fuzz_target!(|data: &[u8]| {
    // Loaders and the wrangling pipeline must reject bad input with an
    // error, never a panic
    if let Ok(table) = biologic::from_reader(data) {
        if let Ok(cv) = CyclicVoltammogram::from_table(&table) {
            let _ = cv.charge_passed();
            let _ = cv.averaged_charge_passed();
            let _ = cv.get_maximum_charges_passed();
        }
    }

    if let Ok(table) = aftermath::from_reader(data, Some(50.0)) {
        let _ = CyclicVoltammogram::from_table(&table).map(|cv| cv.charge_passed());
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = decode_data_url(text);
    }
});
