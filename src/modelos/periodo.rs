use std::ops::RangeInclusive;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::core::FiscalRecord;

/// Calendar quarter of a fiscal year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trimestre {
    T1,
    T2,
    T3,
    T4,
}

impl Trimestre {
    pub const ALL: [Trimestre; 4] = [Self::T1, Self::T2, Self::T3, Self::T4];

    /// The quarter's three-month window (1-based months).
    pub fn months(&self) -> RangeInclusive<u32> {
        match self {
            Self::T1 => 1..=3,
            Self::T2 => 4..=6,
            Self::T3 => 7..=9,
            Self::T4 => 10..=12,
        }
    }

    /// Quarter containing the given 1-based month.
    pub fn from_month(month: u32) -> Option<Self> {
        match month {
            1..=3 => Some(Self::T1),
            4..=6 => Some(Self::T2),
            7..=9 => Some(Self::T3),
            10..=12 => Some(Self::T4),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Self::T1 => 1,
            Self::T2 => 2,
            Self::T3 => 3,
            Self::T4 => 4,
        }
    }

    /// Statutory period code as printed on the forms.
    pub fn code(&self) -> &'static str {
        match self {
            Self::T1 => "1T",
            Self::T2 => "2T",
            Self::T3 => "3T",
            Self::T4 => "4T",
        }
    }
}

/// Declaration period: one quarter or the whole year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Periodo {
    Trimestral(Trimestre),
    Anual,
}

impl Periodo {
    /// Statutory period code ("1T".."4T", or "0A" for the annual summary).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Trimestral(t) => t.code(),
            Self::Anual => "0A",
        }
    }
}

/// `issue_date` is the authoritative date for partitioning — the expense
/// `registration_date` never moves a record between periods.
pub(crate) fn in_year(record: &FiscalRecord, year: i32) -> bool {
    record.issue_date.year() == year
}

pub(crate) fn in_trimestre(record: &FiscalRecord, year: i32, trimestre: Trimestre) -> bool {
    in_year(record, year) && trimestre.months().contains(&record.issue_date.month())
}
