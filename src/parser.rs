//! Vendor parsing strategies.
//!
//! Every vendor format implements [`VendorParser`]: split a page into
//! candidate entry blocks, then turn each block into zero-or-one
//! parsed entries. Malformed entries are never fatal; their lines are
//! tallied as skipped, as are furniture lines trailing a matched entry
//! inside its block. Adding a vendor means adding one strategy module
//! and one arm in [`parser_for`] — shared logic stays untouched.

use crate::detect::Vendor;
use crate::gpay_format::GooglePayParser;
use crate::phonepe_format::PhonePeParser;
use crate::types::RawTransaction;

/// Result of parsing one page of statement text.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PageParse {
    /// Transactions in encounter order.
    pub transactions: Vec<RawTransaction>,
    /// Non-blank lines that matched no template.
    pub skipped_lines: u32,
}

/// A successfully parsed entry block.
///
/// Page furniture that follows a matched entry gets glued onto its block
/// by the scanner; those lines are not part of the entry and are tallied
/// here so the skip count stays exact.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBlock {
    pub transaction: RawTransaction,
    /// Non-blank lines of the block after the matched entry text.
    pub trailing_lines: u32,
}

/// A vendor-specific parsing strategy.
///
/// The contract per block: produce zero-or-one transaction, or declare
/// the block non-matching by returning `None`.
pub trait VendorParser {
    /// The vendor this strategy parses.
    fn vendor(&self) -> Vendor;

    /// Split a page into candidate entry blocks.
    ///
    /// Returns the blocks plus the count of non-blank lines that fell
    /// outside every block (headers, footers, page furniture).
    fn scan_page(&self, page: &str) -> (Vec<String>, u32);

    /// Parse a single entry block; `None` means the block matched no
    /// template for this vendor.
    fn parse_block(&self, block: &str) -> Option<ParsedBlock>;

    /// Parse a full page, tallying the lines of every non-matching block
    /// and the unconsumed tail of every matching one.
    fn parse_page(&self, page: &str) -> PageParse {
        let (blocks, noise) = self.scan_page(page);
        let mut out = PageParse {
            transactions: Vec::new(),
            skipped_lines: noise,
        };
        for block in blocks {
            match self.parse_block(&block) {
                Some(parsed) => {
                    out.transactions.push(parsed.transaction);
                    out.skipped_lines += parsed.trailing_lines;
                }
                None => out.skipped_lines += non_blank_lines(&block),
            }
        }
        out
    }
}

/// Select the parsing strategy for a detected vendor.
pub fn parser_for(vendor: Vendor) -> Box<dyn VendorParser> {
    match vendor {
        Vendor::PhonePe => Box::new(PhonePeParser::new()),
        Vendor::GooglePay => Box::new(GooglePayParser::new()),
    }
}

/// Count the lines of a block that carry any non-whitespace content.
pub(crate) fn non_blank_lines(text: &str) -> u32 {
    text.lines().filter(|l| !l.trim().is_empty()).count() as u32
}

/// Count the non-blank lines of a block that start after the matched
/// entry text. The line the match ends on counts as consumed.
pub(crate) fn lines_after(block: &str, match_end: usize) -> u32 {
    match block[match_end..].find('\n') {
        Some(i) => non_blank_lines(&block[match_end + i + 1..]),
        None => 0,
    }
}
