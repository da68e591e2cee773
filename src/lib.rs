//! Statement Analyser Library
//!
//! A library for parsing UPI app statement text and producing spending
//! analytics.
//!
//! # Supported Vendors
//!
//! - **PhonePe**: transaction statement exports
//! - **Google Pay**: activity statement exports
//!
//! # Features
//!
//! - Detect the vendor format from raw statement text
//! - Parse multi-line statement entries, skipping malformed ones
//! - Classify transactions by amount bucket, weekday and time of day
//! - Single-month or multi-month analytics, selected by date span
//! - Export every analysis table as CSV
//!
//! # Examples
//!
//! ## Analysing a statement text file
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//! use statement_analyser::analytics::AnalysisConfig;
//! use statement_analyser::reader::TextPages;
//! use statement_analyser::pipeline::analyse_pages;
//!
//! let file = File::open("statement.txt")?;
//! let pages = TextPages::new(BufReader::new(file));
//! let bundle = analyse_pages(pages, &AnalysisConfig::default())?;
//! println!("{} transactions analysed", bundle.total_transactions);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Exporting the tables
//!
//! ```no_run
//! use std::path::Path;
//! use statement_analyser::analytics::AnalysisConfig;
//! use statement_analyser::csv_export::export_bundle;
//! use statement_analyser::pipeline::analyse_pages;
//! use statement_analyser::reader::TextPages;
//!
//! let pages = TextPages::new(std::io::stdin().lock());
//! let bundle = analyse_pages(pages, &AnalysisConfig::default())?;
//! let written = export_bundle(&bundle, Path::new("out"))?;
//! println!("{} tables exported", written.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod analytics;
pub mod bundle;
pub mod classify;
pub mod csv_export;
pub mod detect;
pub mod error;
pub mod gpay_format;
pub mod monthly;
pub mod normalize;
pub mod parser;
pub mod phonepe_format;
pub mod pipeline;
pub mod reader;
pub mod types;

// Re-export commonly used types
pub use analytics::AnalysisConfig;
pub use bundle::{AnalysisBundle, AnalysisMode, Cell, Table};
pub use classify::ClassifiedTransaction;
pub use detect::Vendor;
pub use error::{Error, Result};
pub use pipeline::{analyse_pages, parse_pages, parse_pages_as};
pub use types::{Direction, ParsedStatement, RawTransaction};
