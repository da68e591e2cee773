//! Statement Analyser - CLI tool for UPI statement spending analytics.

use clap::Parser;
use rust_decimal::Decimal;
use statement_analyser::{
    analytics::AnalysisConfig,
    bundle::{AnalysisBundle, Table},
    csv_export::export_bundle,
    pipeline::{analyse_statement, parse_pages, parse_pages_as},
    reader::TextPages,
    Result, Vendor,
};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statement_analyser")]
#[command(about = "Analyse PhonePe / Google Pay statement text", long_about = None)]
struct Cli {
    /// Input text file path (or stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Force the vendor format (phonepe, googlepay) instead of auto-detecting
    #[arg(long)]
    vendor: Option<String>,

    /// Directory to export one CSV file per analysis table
    #[arg(long = "export-dir")]
    export_dir: Option<PathBuf>,

    /// Rows in the merchant ranking tables
    #[arg(long, default_value_t = 10)]
    top_merchants: usize,

    /// Rows in the most-expensive-transactions table
    #[arg(long, default_value_t = 10)]
    top_transactions: usize,

    /// Debits below this amount count as small spend
    #[arg(long, default_value = "100")]
    small_threshold: Decimal,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let vendor = match cli.vendor {
        Some(ref s) => Some(s.parse::<Vendor>()?),
        None => None,
    };
    let config = AnalysisConfig {
        top_merchants: cli.top_merchants,
        top_transactions: cli.top_transactions,
        small_amount_threshold: cli.small_threshold,
        ..AnalysisConfig::default()
    };

    let statement = if let Some(ref input_path) = cli.input {
        let pages = TextPages::new(BufReader::new(File::open(input_path)?));
        parse_statement(pages, vendor)?
    } else {
        let stdin = io::stdin();
        let pages = TextPages::new(stdin.lock());
        parse_statement(pages, vendor)?
    };

    let bundle = analyse_statement(statement, &config)?;
    print_bundle(&bundle);

    if let Some(ref dir) = cli.export_dir {
        let written = export_bundle(&bundle, dir)?;
        println!();
        println!("Exported {} tables to {}", written.len(), dir.display());
    }

    Ok(())
}

fn parse_statement<I>(pages: I, vendor: Option<Vendor>) -> Result<statement_analyser::ParsedStatement>
where
    I: IntoIterator<Item = Result<String>>,
{
    match vendor {
        Some(v) => parse_pages_as(pages, v),
        None => parse_pages(pages),
    }
}

fn print_bundle(bundle: &AnalysisBundle) {
    println!("Mode:          {}", bundle.mode.as_str());
    println!(
        "Date range:    {} to {}",
        bundle.date_range_start, bundle.date_range_end
    );
    println!("Transactions:  {}", bundle.total_transactions);
    println!("Skipped lines: {}", bundle.skipped_lines);
    if let Some(ref month) = bundle.highest_spend_month {
        println!("Highest spend: {}", month);
    }
    if let Some(ref month) = bundle.lowest_spend_month {
        println!("Lowest spend:  {}", month);
    }

    for table in bundle.tables() {
        print_table(table);
    }
}

fn print_table(table: &Table) {
    let rendered: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.len()).collect();
    for row in &rendered {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    println!();
    println!("== {} ==", table.name);
    let header: Vec<String> = table
        .columns
        .iter()
        .zip(&widths)
        .map(|(name, width)| format!("{:<1$}", name, width))
        .collect();
    println!("{}", header.join("  "));
    for row in &rendered {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<1$}", cell, width))
            .collect();
        println!("{}", cells.join("  "));
    }
}
