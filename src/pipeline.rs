//! The end-to-end pipeline: pages of text in, analysis bundle out.
//!
//! Pages are consumed lazily. Until a vendor marker is seen, pages are
//! buffered; once detection fires, the buffered pages and the rest of
//! the stream go through the selected vendor strategy. Cover pages
//! before the first marker are still parsed, so their non-blank lines
//! count as skipped.

use crate::analytics::{analyse, AnalysisConfig};
use crate::bundle::AnalysisBundle;
use crate::classify::ClassifiedTransaction;
use crate::detect::{detect_vendor, Vendor};
use crate::error::{Error, Result};
use crate::parser::parser_for;
use crate::types::ParsedStatement;

/// Parse a page stream, auto-detecting the vendor.
///
/// Fails with [`Error::UnsupportedFormat`] when no page carries a known
/// vendor marker.
pub fn parse_pages<I>(pages: I) -> Result<ParsedStatement>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut iter = pages.into_iter();
    let mut buffered: Vec<String> = Vec::new();
    let mut vendor: Option<Vendor> = None;

    for page in iter.by_ref() {
        let page = page?;
        let detected = detect_vendor(&page);
        buffered.push(page);
        if let Some(v) = detected {
            vendor = Some(v);
            break;
        }
    }
    let Some(vendor) = vendor else {
        // Drain the stream so a late read error still surfaces.
        for page in iter {
            page?;
        }
        return Err(Error::UnsupportedFormat);
    };

    parse_with(vendor, buffered.into_iter().map(Ok).chain(iter))
}

/// Parse a page stream with a caller-selected vendor, skipping
/// detection entirely.
pub fn parse_pages_as<I>(pages: I, vendor: Vendor) -> Result<ParsedStatement>
where
    I: IntoIterator<Item = Result<String>>,
{
    parse_with(vendor, pages)
}

fn parse_with<I>(vendor: Vendor, pages: I) -> Result<ParsedStatement>
where
    I: IntoIterator<Item = Result<String>>,
{
    let parser = parser_for(vendor);
    let mut statement = ParsedStatement {
        vendor,
        transactions: Vec::new(),
        skipped_lines: 0,
    };
    for page in pages {
        let parsed = parser.parse_page(&page?);
        statement.transactions.extend(parsed.transactions);
        statement.skipped_lines += parsed.skipped_lines;
    }
    Ok(statement)
}

/// Classify a parsed statement and run the analytics engine over it.
pub fn analyse_statement(
    statement: ParsedStatement,
    config: &AnalysisConfig,
) -> Result<AnalysisBundle> {
    let records: Vec<ClassifiedTransaction> = statement
        .transactions
        .into_iter()
        .map(ClassifiedTransaction::from)
        .collect();
    analyse(&records, statement.skipped_lines, config)
}

/// The full pipeline: detect, parse, classify, analyse.
pub fn analyse_pages<I>(pages: I, config: &AnalysisConfig) -> Result<AnalysisBundle>
where
    I: IntoIterator<Item = Result<String>>,
{
    analyse_statement(parse_pages(pages)?, config)
}
