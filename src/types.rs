//! Common types shared by the vendor parsers and the analytics engine.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::detect::Vendor;

/// Debit/Credit indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Debit transaction (outgoing).
    Debit,
    /// Credit transaction (incoming).
    Credit,
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "D" | "DEBIT" => Ok(Direction::Debit),
            "C" | "CREDIT" => Ok(Direction::Credit),
            _ => Err(format!("Invalid direction indicator: {}", s)),
        }
    }
}

impl Direction {
    /// Display label used in tables and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Debit => "Debit",
            Direction::Credit => "Credit",
        }
    }
}

/// A single transaction extracted from statement text.
///
/// Built once per matched statement entry and immutable thereafter.
/// `amount` is strictly positive; the direction says which way it moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransaction {
    /// Calendar date of the transaction.
    pub date: NaiveDate,

    /// Time of day, when the vendor format carries one.
    pub time: Option<NaiveTime>,

    /// Normalized merchant display name.
    pub merchant: String,

    /// Debit or credit.
    pub direction: Direction,

    /// Transaction amount, strictly positive.
    pub amount: Decimal,

    /// Vendor transaction reference, when present.
    pub reference: Option<String>,

    /// Masked account identifier (e.g. "XX1234"), when present.
    pub account: Option<String>,
}

/// Everything extracted from one statement document.
///
/// `skipped_lines` is the explicit accumulator for lines that matched no
/// vendor template; it travels with the records instead of living in any
/// global counter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedStatement {
    /// Detected vendor format.
    pub vendor: Vendor,

    /// Transactions in statement-encounter order (not necessarily
    /// chronological).
    pub transactions: Vec<RawTransaction>,

    /// Non-blank input lines that matched no vendor template.
    pub skipped_lines: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() {
        assert_eq!("D".parse::<Direction>().ok(), Some(Direction::Debit));
        assert_eq!("credit".parse::<Direction>().ok(), Some(Direction::Credit));
        assert!("X".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_as_str() {
        assert_eq!(Direction::Debit.as_str(), "Debit");
        assert_eq!(Direction::Credit.as_str(), "Credit");
    }
}
