//! The analysis result bundle.
//!
//! The bundle is the core's output contract: a named, ordered set of
//! tables plus a handful of top-level scalars. Table and column names are
//! the de facto interface consumed by export and rendering collaborators
//! and must stay stable across parser/classifier changes. The bundle is
//! built once per run and never mutated afterwards; it carries no
//! presentation concerns.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fmt;

/// Stable table names — the contract with export/rendering collaborators.
pub mod table_names {
    pub const SUMMARY: &str = "summary";
    pub const TOP_MERCHANTS: &str = "top_merchants";
    pub const CATEGORY_HISTOGRAM: &str = "category_histogram";
    pub const WEEKDAY_SPENDING: &str = "weekday_spending";
    pub const TIME_OF_DAY_SPENDING: &str = "time_of_day_spending";
    pub const DAILY_FREQUENCY: &str = "daily_frequency";
    pub const FREQUENCY_SUMMARY: &str = "frequency_summary";
    pub const TOP_EXPENSIVE: &str = "top_expensive";
    pub const SMALL_SPEND_MERCHANTS: &str = "small_spend_merchants";
    pub const RECURRING_MERCHANTS: &str = "recurring_merchants";

    // Multi-month only.
    pub const MONTHLY_TOTALS: &str = "monthly_totals";
    pub const MONTH_OVER_MONTH: &str = "month_over_month";
    pub const MONTHLY_TOP_MERCHANTS: &str = "monthly_top_merchants";
    pub const MONTHLY_BIGGEST_TRANSACTION: &str = "monthly_biggest_transaction";
    pub const OVERALL_TOP_MERCHANTS: &str = "overall_top_merchants";
    pub const OVERALL_CATEGORY_HISTOGRAM: &str = "overall_category_histogram";
    pub const CUMULATIVE_DAILY: &str = "cumulative_daily";
    pub const CUMULATIVE_MONTHLY: &str = "cumulative_monthly";
}

/// Which analyzer produced the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Record set spans at most 30 days.
    SingleMonth,
    /// Record set spans more than 30 days.
    MultiMonth,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::SingleMonth => "SingleMonth",
            AnalysisMode::MultiMonth => "MultiMonth",
        }
    }
}

/// One value in a table row.
///
/// `Null` is the explicit sentinel for undefined results (means over
/// empty sets, percentage change against a zero base); computations
/// produce it instead of faulting on a zero denominator.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Amount(Decimal),
    Date(NaiveDate),
    Null,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Int(n) => write!(f, "{}", n),
            Cell::Amount(d) => write!(f, "{}", d),
            Cell::Date(d) => write!(f, "{}", d),
            Cell::Null => write!(f, "n/a"),
        }
    }
}

impl From<Option<Decimal>> for Cell {
    fn from(value: Option<Decimal>) -> Self {
        match value {
            Some(d) => Cell::Amount(d),
            None => Cell::Null,
        }
    }
}

/// A named table of ordered rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Stable name from [`table_names`].
    pub name: &'static str,
    /// Column names, in row order.
    pub columns: Vec<&'static str>,
    /// Ordered rows; each row has exactly `columns.len()` cells.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(name: &'static str, columns: Vec<&'static str>) -> Self {
        Table {
            name,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Prefix every row with a `month` column; used when a single-month
    /// table is computed independently per calendar month.
    pub fn prepend_month(&mut self, label: &str) {
        if self.columns.first() != Some(&"month") {
            self.columns.insert(0, "month");
        }
        for row in &mut self.rows {
            row.insert(0, Cell::Text(label.to_string()));
        }
    }

    /// Append the rows of `other` (same shape) to this table.
    pub fn extend_rows(&mut self, other: Table) {
        debug_assert_eq!(self.columns, other.columns);
        self.rows.extend(other.rows);
    }
}

/// The immutable result of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisBundle {
    /// Single- or multi-month analyzer.
    pub mode: AnalysisMode,
    /// Earliest transaction date.
    pub date_range_start: NaiveDate,
    /// Latest transaction date.
    pub date_range_end: NaiveDate,
    /// Number of classified transactions analysed.
    pub total_transactions: usize,
    /// Input lines that matched no vendor template (run metadata).
    pub skipped_lines: u32,
    /// Label of the highest-debit month (multi-month mode only).
    pub highest_spend_month: Option<String>,
    /// Label of the lowest-debit month (multi-month mode only).
    pub lowest_spend_month: Option<String>,

    tables: Vec<Table>,
}

impl AnalysisBundle {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        mode: AnalysisMode,
        date_range_start: NaiveDate,
        date_range_end: NaiveDate,
        total_transactions: usize,
        skipped_lines: u32,
        highest_spend_month: Option<String>,
        lowest_spend_month: Option<String>,
        tables: Vec<Table>,
    ) -> Self {
        AnalysisBundle {
            mode,
            date_range_start,
            date_range_end,
            total_transactions,
            skipped_lines,
            highest_spend_month,
            lowest_spend_month,
            tables,
        }
    }

    /// All tables, in production order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Look up a table by its stable name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Text("Zomato".into()).to_string(), "Zomato");
        assert_eq!(Cell::Int(3).to_string(), "3");
        assert_eq!(Cell::Amount(Decimal::new(12345, 2)).to_string(), "123.45");
        assert_eq!(Cell::Null.to_string(), "n/a");
        assert_eq!(
            Cell::Date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()).to_string(),
            "2025-06-01"
        );
    }

    #[test]
    fn test_prepend_month() {
        let mut table = Table::new(table_names::TOP_MERCHANTS, vec!["merchant", "total"]);
        table.push_row(vec![Cell::Text("Zomato".into()), Cell::Int(1)]);
        table.prepend_month("June 2025");

        assert_eq!(table.columns, vec!["month", "merchant", "total"]);
        assert_eq!(table.rows[0][0], Cell::Text("June 2025".into()));
    }

    #[test]
    fn test_bundle_table_lookup() {
        let table = Table::new(table_names::SUMMARY, vec!["metric", "value"]);
        let bundle = AnalysisBundle::new(
            AnalysisMode::SingleMonth,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            3,
            0,
            None,
            None,
            vec![table],
        );
        assert!(bundle.table(table_names::SUMMARY).is_some());
        assert!(bundle.table("no_such_table").is_none());
    }
}
