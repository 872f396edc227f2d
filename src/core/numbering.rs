use super::types::{FiscalRecord, RecordKind};

/// Year-scoped document number sequencing over the `{A|R}-{yy}-{n}` series.
///
/// The sequencer is a pure projection over the record snapshot: it reserves
/// nothing and mutates nothing, so it is safe to call on every keystroke
/// while the user types a candidate number. A new year starts at 1 the first
/// time it is requested — there is no close-the-year operation.
///
/// Whether a typed number that already exists means "load for edit" rather
/// than "propose new" is the caller's distinction, made by checking
/// existence first.
pub fn next_document_number(existing: &[FiscalRecord], kind: RecordKind, year: i32) -> String {
    let max = existing
        .iter()
        .filter(|r| r.kind == kind)
        .filter_map(|r| parse_document_number(&r.document_number, kind, year))
        .max()
        .unwrap_or(0);
    format_document_number(kind, year, max + 1)
}

/// Format a sequence number into the series pattern, e.g. `A-25-14`.
///
/// `n` carries no fixed width and no leading zeros.
pub fn format_document_number(kind: RecordKind, year: i32, n: u64) -> String {
    format!("{}-{:02}-{}", kind.series_prefix(), two_digit_year(year), n)
}

/// Anchored parse of a document number against the series pattern for the
/// given kind and year. Returns the sequence number, or `None` when the
/// number belongs to another kind, another year, or does not match the
/// pattern exactly. Loose prefix matching is deliberately not performed.
pub fn parse_document_number(number: &str, kind: RecordKind, year: i32) -> Option<u64> {
    let parts: Vec<&str> = number.split('-').collect();
    let [prefix, yy, n] = parts.as_slice() else {
        return None;
    };

    if prefix.len() != 1 || prefix.chars().next() != Some(kind.series_prefix()) {
        return None;
    }
    if *yy != format!("{:02}", two_digit_year(year)) {
        return None;
    }
    // Positive integer, no leading zeros, no fixed width.
    if n.is_empty() || !n.bytes().all(|b| b.is_ascii_digit()) || n.starts_with('0') {
        return None;
    }
    n.parse().ok()
}

fn two_digit_year(year: i32) -> u32 {
    (year.rem_euclid(100)) as u32
}
