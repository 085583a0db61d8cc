#![no_main]

use libfuzzer_sys::fuzz_target;

use echem_analytics::hills::HillsFile;

fuzz_target!(|data: &[u8]| {
    if let Ok(hills) = HillsFile::from_reader(data) {
        for decimals in [0, 2, 6] {
            let _ = hills.walker_series(decimals);
        }
    }
});
