//! PhonePe statement format parser.
//!
//! A PhonePe statement entry spans several extracted-text lines:
//!
//! ```text
//! Jun 01, 2025 Paid to Amazon India Debit INR 1,234.56
//! 07:30 PM
//! Transaction ID : T2506011234567890
//! UTR No : 512345678901
//! Debited from XX1234
//! ```
//!
//! Entries begin at a `Mon DD, YYYY` date line; the merchant name may wrap
//! onto the following line. Blocks that fail the entry template are
//! skipped, never fatal.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::detect::Vendor;
use crate::error::{Error, Result};
use crate::normalize::normalize_merchant;
use crate::parser::{lines_after, ParsedBlock, VendorParser};
use crate::types::{Direction, RawTransaction};

/// Parsing strategy for PhonePe statements.
pub struct PhonePeParser {
    start: Regex,
    entry: Regex,
}

impl PhonePeParser {
    pub fn new() -> Self {
        // Hardcoded patterns; compilation cannot fail at runtime.
        let start = Regex::new(r"^[A-Za-z]{3}\s+\d{2},\s+\d{4}\b").expect("valid regex");
        let entry = Regex::new(concat!(
            r"(?s)^(?P<date>[A-Za-z]{3}\s+\d{2},\s+\d{4})\s+",
            r"(?:Paid to|Received from)\s+",
            r"(?P<merchant>.+?)\s+",
            r"(?P<dir>Debit|Credit)\s+INR\s+",
            r"(?P<amount>[\d,]+\.\d{2})\s+",
            r"(?P<time>\d{1,2}:\d{2}\s*[AP]M)\s+",
            r"Transaction ID\s*:\s*(?P<reference>[A-Z0-9]+)\s+",
            r"UTR No\s*:\s*\d+\s+",
            r"(?:Debited from|Credited to)\s+(?P<account>XX\d+)",
        ))
        .expect("valid regex");
        PhonePeParser { start, entry }
    }
}

impl Default for PhonePeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorParser for PhonePeParser {
    fn vendor(&self) -> Vendor {
        Vendor::PhonePe
    }

    fn scan_page(&self, page: &str) -> (Vec<String>, u32) {
        let mut blocks = Vec::new();
        let mut current: Option<String> = None;
        let mut noise = 0u32;

        for line in page.lines() {
            if self.start.is_match(line.trim_start()) {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
                current = Some(line.to_string());
            } else if let Some(ref mut block) = current {
                block.push('\n');
                block.push_str(line);
            } else if !line.trim().is_empty() {
                noise += 1;
            }
        }
        if let Some(block) = current.take() {
            blocks.push(block);
        }

        (blocks, noise)
    }

    fn parse_block(&self, block: &str) -> Option<ParsedBlock> {
        let text = block.trim_start();
        let caps = self.entry.captures(text)?;
        let match_end = caps.get(0).map_or(text.len(), |m| m.end());

        let date = parse_statement_date(&caps["date"]).ok()?;
        let time = parse_statement_time(&caps["time"]).ok()?;
        let amount = parse_amount(&caps["amount"]).ok()?;
        let direction = caps["dir"].parse::<Direction>().ok()?;

        Some(ParsedBlock {
            transaction: RawTransaction {
                date,
                time: Some(time),
                merchant: normalize_merchant(&caps["merchant"]),
                direction,
                amount,
                reference: Some(caps["reference"].to_string()),
                account: Some(caps["account"].to_string()),
            },
            trailing_lines: lines_after(text, match_end),
        })
    }
}

/// Parse a `Mon DD, YYYY` date, tolerating uneven internal spacing.
fn parse_statement_date(s: &str) -> Result<NaiveDate> {
    let clean = s.split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveDate::parse_from_str(&clean, "%b %d, %Y").map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Parse an `hh:mm AM/PM` time.
fn parse_statement_time(s: &str) -> Result<NaiveTime> {
    let clean: String = s.split_whitespace().collect();
    NaiveTime::parse_from_str(&clean, "%I:%M%p").map_err(|_| Error::InvalidTime(s.to_string()))
}

/// Parse an amount with thousands separators; must be strictly positive.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned = s.trim().replace(',', "");
    let amount =
        Decimal::from_str(&cleaned).map_err(|_| Error::InvalidAmount(s.to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(s.to_string()));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use pretty_assertions::assert_eq;

    const ENTRY: &str = "Jun 01, 2025 Paid to Amazon India Debit INR 1,234.56\n\
                         07:30 PM\n\
                         Transaction ID : T2506011234567890\n\
                         UTR No : 512345678901\n\
                         Debited from XX1234";

    #[test]
    fn test_parse_block_basic() {
        let parser = PhonePeParser::new();
        let parsed = parser.parse_block(ENTRY).unwrap();
        assert_eq!(parsed.trailing_lines, 0);

        let txn = parsed.transaction;
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(txn.time, NaiveTime::from_hms_opt(19, 30, 0));
        assert_eq!(txn.merchant, "Amazon India");
        assert_eq!(txn.direction, Direction::Debit);
        assert_eq!(txn.amount.to_string(), "1234.56");
        assert_eq!(txn.reference.as_deref(), Some("T2506011234567890"));
        assert_eq!(txn.account.as_deref(), Some("XX1234"));
    }

    #[test]
    fn test_parse_block_credit() {
        let parser = PhonePeParser::new();
        let txn = parser
            .parse_block(
                "Jun 03, 2025 Received from Salary Credit INR 50,000.00\n\
                 09:01 AM\n\
                 Transaction ID : T2506030000000001\n\
                 UTR No : 512345678902\n\
                 Credited to XX1234",
            )
            .unwrap()
            .transaction;

        assert_eq!(txn.direction, Direction::Credit);
        assert_eq!(txn.amount.to_string(), "50000.00");
        assert_eq!(txn.merchant, "Salary");
    }

    #[test]
    fn test_merchant_wraps_to_next_line() {
        let parser = PhonePeParser::new();
        let txn = parser
            .parse_block(
                "Jun 02, 2025 Paid to Cafe Coffee\nDay Debit INR 320.00\n\
                 08:15 PM\n\
                 Transaction ID : T2506020000000002\n\
                 UTR No : 512345678903\n\
                 Debited from XX1234",
            )
            .unwrap()
            .transaction;
        assert_eq!(txn.merchant, "Cafe Coffee Day");
    }

    #[test]
    fn test_furniture_after_entry_counts_as_trailing() {
        let parser = PhonePeParser::new();
        let parsed = parser
            .parse_block(&format!("{}\nPage 1 of 2\nphonepe.com", ENTRY))
            .unwrap();
        assert_eq!(parsed.transaction.merchant, "Amazon India");
        assert_eq!(parsed.trailing_lines, 2);
    }

    #[test]
    fn test_non_matching_block() {
        let parser = PhonePeParser::new();
        assert_eq!(parser.parse_block("Jun 02, 2025 page subtotal INR 12.00"), None);
    }

    #[test]
    fn test_parse_page_counts_skipped() {
        let parser = PhonePeParser::new();
        let page = format!(
            "PhonePe Transaction Statement\nfor 9876543210\n\n{}\n\
             Jun 02, 2025 garbled entry with no amount\nstill garbled\n",
            ENTRY
        );
        let out = parser.parse_page(&page);
        assert_eq!(out.transactions.len(), 1);
        // Two header lines plus two lines of the garbled block.
        assert_eq!(out.skipped_lines, 4);
    }

    #[test]
    fn test_footer_between_entries_is_skipped() {
        let parser = PhonePeParser::new();
        let page = format!(
            "{}\nPage 1 of 2\n\
             Jun 03, 2025 Received from Salary Credit INR 50,000.00\n\
             09:01 AM\n\
             Transaction ID : T2506030000000001\n\
             UTR No : 512345678902\n\
             Credited to XX1234\n",
            ENTRY
        );
        let out = parser.parse_page(&page);
        // The footer glues onto the first entry's block but is no part
        // of the matched entry.
        assert_eq!(out.transactions.len(), 2);
        assert_eq!(out.skipped_lines, 1);
    }

    #[test]
    fn test_parse_amount_rejects_non_positive() {
        assert!(parse_amount("0.00").is_err());
        assert!(parse_amount("abc").is_err());
        assert_eq!(parse_amount("1,540.00").unwrap().to_string(), "1540.00");
    }

    #[test]
    fn test_garbled_time_is_a_time_error() {
        assert!(matches!(
            parse_statement_time("07:xx PM"),
            Err(Error::InvalidTime(_))
        ));
        assert_eq!(
            parse_statement_time("07:30 PM").unwrap(),
            NaiveTime::from_hms_opt(19, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_statement_date() {
        let date = parse_statement_date("Jun  07,  2025").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 6, 7));
        assert!(parse_statement_date("Jun 31, 2025").is_err());
    }
}
