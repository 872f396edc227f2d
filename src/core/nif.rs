//! Spanish tax identifier validation: NIF/DNI, NIE, and CIF shapes.

use serde::{Deserialize, Serialize};

/// Mod-23 control letter table shared by DNI and NIE checksums.
pub const CONTROL_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Leading letters permitted for a CIF-shaped company identifier.
const CIF_LEADING: &[u8] = b"ABCDEFGHJKLMNPQRSUVW";

/// Recognized identifier shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxIdKind {
    /// Natural person: 8 digits + control letter.
    Dni,
    /// Foreign resident: X/Y/Z + 7 digits + control letter.
    Nie,
    /// Company: leading letter + 7 digits + trailing alphanumeric.
    Cif,
}

/// Outcome of [`validate_tax_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxIdValidation {
    /// Shape recognized and checksum (where defined) correct.
    Valid(TaxIdKind),
    /// Shape recognized but the control letter does not match.
    InvalidChecksum {
        kind: TaxIdKind,
        /// The control letter the mod-23 table expects.
        expected: char,
    },
    /// None of the three shapes matched.
    UnrecognizedFormat,
}

impl TaxIdValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Normalized form of an identifier: trimmed and upper-cased.
///
/// This is the form used for classification, checksum arithmetic, and for
/// grouping counterparties in the annual declarations.
pub fn normalize_tax_id(input: &str) -> String {
    input.trim().to_uppercase()
}

/// Classify and checksum-validate a Spanish tax identifier.
///
/// Pure function, no side effects. Callers decide policy: income-side
/// callers treat anything but `Valid` as blocking; expense-side callers
/// treat it as a non-blocking advisory so foreign and intracommunity VAT
/// numbers stay saveable.
///
/// The CIF control digit is intentionally not verified; only the
/// structural shape is checked.
///
/// ```
/// use librofiscal::core::{validate_tax_id, TaxIdKind, TaxIdValidation};
///
/// assert_eq!(validate_tax_id("12345678Z"), TaxIdValidation::Valid(TaxIdKind::Dni));
/// assert_eq!(validate_tax_id("X1234567L"), TaxIdValidation::Valid(TaxIdKind::Nie));
/// assert_eq!(validate_tax_id("FR99123456789"), TaxIdValidation::UnrecognizedFormat);
/// ```
pub fn validate_tax_id(input: &str) -> TaxIdValidation {
    let id = normalize_tax_id(input);
    let b = id.as_bytes();
    if b.len() != 9 {
        return TaxIdValidation::UnrecognizedFormat;
    }

    // DNI: 8 digits + control letter.
    if b[..8].iter().all(u8::is_ascii_digit) && b[8].is_ascii_uppercase() {
        let number: u32 = id[..8].parse().unwrap_or(0);
        return check_mod23(TaxIdKind::Dni, number, b[8]);
    }

    // NIE: X/Y/Z prefix maps to 0/1/2, then the same mod-23 check over the
    // resulting 8-digit number.
    if matches!(b[0], b'X' | b'Y' | b'Z')
        && b[1..8].iter().all(u8::is_ascii_digit)
        && b[8].is_ascii_uppercase()
    {
        let prefix = u32::from(b[0] - b'X');
        let number: u32 = id[1..8].parse().unwrap_or(0);
        return check_mod23(TaxIdKind::Nie, prefix * 10_000_000 + number, b[8]);
    }

    // CIF shape: structural check only.
    if CIF_LEADING.contains(&b[0])
        && b[1..8].iter().all(u8::is_ascii_digit)
        && b[8].is_ascii_alphanumeric()
    {
        return TaxIdValidation::Valid(TaxIdKind::Cif);
    }

    TaxIdValidation::UnrecognizedFormat
}

fn check_mod23(kind: TaxIdKind, number: u32, given: u8) -> TaxIdValidation {
    let expected = CONTROL_LETTERS[(number % 23) as usize];
    if given == expected {
        TaxIdValidation::Valid(kind)
    } else {
        TaxIdValidation::InvalidChecksum {
            kind,
            expected: expected as char,
        }
    }
}
