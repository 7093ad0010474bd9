#![no_main]

use libfuzzer_sys::fuzz_target;
use merodis_bench::naming::{result_filename, underscore};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Must not panic on any input, including non-ASCII case names
        let filename = result_filename(input);
        assert!(filename.ends_with(".json"));

        // Separators are only ever inserted, never doubled up by a second pass
        let once = underscore(input);
        if once.is_ascii() {
            assert_eq!(underscore(&once), once);
        }
    }
});
