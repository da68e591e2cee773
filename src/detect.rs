//! Vendor format detection.
//!
//! Each supported issuer leaves distinctive literal markers in its
//! statement text (header strings, fixed field labels). Detection scans
//! the whitespace-normalized text top-to-bottom and the earliest marker
//! wins. The marker tables are disjoint by construction: no string may
//! appear in both.
//!
//! Detection markers are deliberately separate from the line-extraction
//! templates in the format modules; they only answer "whose statement is
//! this", never "where is a transaction".

use std::str::FromStr;

use crate::error::Error;

/// Supported statement vendors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vendor {
    /// PhonePe wallet statements.
    PhonePe,
    /// Google Pay (UPI) statements.
    GooglePay,
}

impl FromStr for Vendor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "phonepe" => Ok(Vendor::PhonePe),
            "googlepay" | "gpay" | "google-pay" => Ok(Vendor::GooglePay),
            _ => Err(Error::UnsupportedFormat),
        }
    }
}

impl Vendor {
    /// Display name for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vendor::PhonePe => "PhonePe",
            Vendor::GooglePay => "Google Pay",
        }
    }
}

/// Literal markers unique to PhonePe statement text.
const PHONEPE_MARKERS: &[&str] = &["Transaction ID :", "Debited from", "Credited to"];

/// Literal markers unique to Google Pay statement text. Google Pay page
/// extraction frequently merges tokens, so the glued spellings are the
/// reliable ones.
const GOOGLE_PAY_MARKERS: &[&str] = &[
    "UPITransactionID:",
    "UPI Transaction ID:",
    "Paidto",
    "Receivedfrom",
];

/// Detect the vendor of a statement from raw page text.
///
/// Runs of whitespace are collapsed first so markers survive line wraps.
/// Returns `None` when no marker from either table occurs; callers fail
/// fast with [`Error::UnsupportedFormat`] rather than guessing.
pub fn detect_vendor(text: &str) -> Option<Vendor> {
    let clean: String = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let first_hit = |markers: &[&str]| -> Option<usize> {
        markers.iter().filter_map(|m| clean.find(m)).min()
    };

    match (first_hit(PHONEPE_MARKERS), first_hit(GOOGLE_PAY_MARKERS)) {
        (Some(p), Some(g)) => {
            if p <= g {
                Some(Vendor::PhonePe)
            } else {
                Some(Vendor::GooglePay)
            }
        }
        (Some(_), None) => Some(Vendor::PhonePe),
        (None, Some(_)) => Some(Vendor::GooglePay),
        (None, None) => None,
    }
}
