//! Google Pay statement format parser.
//!
//! Google Pay page extraction merges tokens aggressively, so entries look
//! like:
//!
//! ```text
//! 01Jun,2025 Paidto MissRUCHIKAPANDE
//! ₹1,234.56 7:30PM
//! UPITransactionID: 123456789012
//! ```
//!
//! Label tokens (`Paidto`, `Receivedfrom`, `UPITransactionID:`) are often
//! glued to the preceding text; the scanner re-inserts the missing spaces
//! before splitting a page into entry blocks. Time is optional in this
//! format, and no masked account is present.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::str::FromStr;

use crate::detect::Vendor;
use crate::error::{Error, Result};
use crate::normalize::normalize_merchant;
use crate::parser::{lines_after, ParsedBlock, VendorParser};
use crate::phonepe_format::parse_amount;
use crate::types::{Direction, RawTransaction};

/// Parsing strategy for Google Pay statements.
pub struct GooglePayParser {
    start: Regex,
    entry: Regex,
    glued: Regex,
    stray_amount: Regex,
    stray_time: Regex,
    stray_reference: Regex,
    label_tail: Regex,
    wide_gap: Regex,
}

/// Merchant captures longer than this are runaway grabs of neighbouring
/// columns, not real names.
const MERCHANT_MAX_LEN: usize = 50;

impl GooglePayParser {
    pub fn new() -> Self {
        // Hardcoded patterns; compilation cannot fail at runtime.
        let start = Regex::new(r"^\d{2}[A-Za-z]{3},\s?\d{4}\b").expect("valid regex");
        let entry = Regex::new(concat!(
            r"(?s)^(?P<date>\d{2}[A-Za-z]{3},\s?\d{4})\s*",
            r"(?P<dir>Paidto|Receivedfrom)\s+",
            r"(?P<merchant>.*?)\s*",
            r"₹\s*(?P<amount>[\d,]+(?:\.\d+)?)\s*",
            r"(?P<time>\d{1,2}:\d{2}\s*[AP]M)?\s*",
            r"UPI\s*Transaction\s*ID\s*:?\s*(?P<reference>\d+)",
        ))
        .expect("valid regex");
        let glued = Regex::new(r"(?P<pre>\S)(?P<tok>Paidto|Receivedfrom|Paidby|UPITransactionID:)")
            .expect("valid regex");
        let stray_amount = Regex::new(r"₹[\d,]+(?:\.\d+)?").expect("valid regex");
        let stray_time = Regex::new(r"\d{1,2}:\d{2}\s*[AP]M").expect("valid regex");
        let stray_reference =
            Regex::new(r"(?i)UPI\s*Transaction\s*ID:?\s*\d*").expect("valid regex");
        let label_tail =
            Regex::new(r"(?i)\b(?:Paidto|Receivedfrom|Paidby|UPI|Transaction|ID)\b.*")
                .expect("valid regex");
        let wide_gap = Regex::new(r"\s{2,}|\t").expect("valid regex");
        GooglePayParser {
            start,
            entry,
            glued,
            stray_amount,
            stray_time,
            stray_reference,
            label_tail,
            wide_gap,
        }
    }

    /// Re-insert the spaces the text extraction dropped before label
    /// tokens, so entry scanning sees them as standalone words.
    fn unglue(&self, page: &str) -> String {
        self.glued.replace_all(page, "${pre} ${tok}").into_owned()
    }

    /// Strip fragments of neighbouring fields that leak into the merchant
    /// capture when an entry wraps across lines: stray amounts, times,
    /// reference numbers, then any trailing label words. Only the first
    /// line survives, capped at [`MERCHANT_MAX_LEN`] characters.
    fn scrub_merchant(&self, raw: &str) -> String {
        let text = self.stray_amount.replace_all(raw, " ");
        let text = self.stray_time.replace_all(&text, " ");
        let text = self.stray_reference.replace_all(&text, " ");
        let text = self.label_tail.replace_all(&text, " ");

        let mut first = text.lines().next().unwrap_or("").trim().to_string();
        if first.chars().count() > MERCHANT_MAX_LEN {
            // Runaway capture: cut at the first wide column gap.
            first = self
                .wide_gap
                .split(&first)
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            if first.chars().count() > MERCHANT_MAX_LEN {
                first = first.chars().take(MERCHANT_MAX_LEN).collect();
            }
        }

        let cleaned = normalize_merchant(&first);
        if cleaned.is_empty() {
            "Unknown".to_string()
        } else {
            cleaned
        }
    }
}

impl Default for GooglePayParser {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorParser for GooglePayParser {
    fn vendor(&self) -> Vendor {
        Vendor::GooglePay
    }

    fn scan_page(&self, page: &str) -> (Vec<String>, u32) {
        let page = self.unglue(page);
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

        let date = parse_gpay_date(&caps["date"]).ok()?;
        let amount = parse_amount(&caps["amount"]).ok()?;
        let direction = match &caps["dir"] {
            "Paidto" => Direction::Debit,
            _ => Direction::Credit,
        };
        // Time is optional in this format; a present-but-garbled time
        // rejects the block like any other malformed field.
        let time = match caps.name("time") {
            Some(m) => Some(parse_gpay_time(m.as_str()).ok()?),
            None => None,
        };

        Some(ParsedBlock {
            transaction: RawTransaction {
                date,
                time,
                merchant: self.scrub_merchant(&caps["merchant"]),
                direction,
                amount,
                reference: Some(caps["reference"].to_string()),
                account: None,
            },
            trailing_lines: lines_after(text, match_end),
        })
    }
}

/// Parse a `DDMon,YYYY` date.
fn parse_gpay_date(s: &str) -> Result<NaiveDate> {
    let clean: String = s.split_whitespace().collect();
    NaiveDate::parse_from_str(&clean, "%d%b,%Y").map_err(|_| Error::InvalidDate(s.to_string()))
}

/// Parse an `h:mmAM`-style time.
fn parse_gpay_time(s: &str) -> Result<NaiveTime> {
    let clean: String = s.split_whitespace().collect();
    NaiveTime::parse_from_str(&clean, "%I:%M%p").map_err(|_| Error::InvalidTime(s.to_string()))
}
