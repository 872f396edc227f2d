#![no_main]

use libfuzzer_sys::fuzz_target;
use librofiscal::core::{RecordKind, parse_document_number};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — non-matching numbers are None, never an error.
        for kind in [RecordKind::Income, RecordKind::Expense] {
            for year in [2025, 1999, 0, -5] {
                let _ = parse_document_number(s, kind, year);
            }
        }
    }
});
