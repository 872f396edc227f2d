#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — any input classifies, worst case UnrecognizedFormat.
        let _ = librofiscal::core::validate_tax_id(s);
    }
});
