//! Analytics engine: mode selection and the single-month table builders.
//!
//! Every builder takes the full classified record set and produces one
//! named [`Table`]. Bucketed tables are always fully populated
//! (zero-filled), and every statistic over a possibly-empty denominator
//! goes through [`ratio`] so an undefined value becomes a [`Cell::Null`]
//! sentinel rather than a fault. Multi-month analysis reuses these
//! builders per calendar month (see [`crate::monthly`]).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::bundle::{table_names, AnalysisBundle, AnalysisMode, Cell, Table};
use crate::classify::{CategoryBucket, ClassifiedTransaction, TimeOfDay, WEEKDAYS};
use crate::error::{Error, Result};
use crate::monthly;
use crate::types::Direction;

/// Span (in days) at or below which the single-month analyzer runs.
const SINGLE_MONTH_MAX_SPAN_DAYS: i64 = 30;

/// Tunable knobs for the analytics engine.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Rows in the merchant ranking tables.
    pub top_merchants: usize,
    /// Rows in the most-expensive-transactions table.
    pub top_transactions: usize,
    /// Merchants ranked per month in multi-month mode.
    pub per_month_merchants: usize,
    /// Debits strictly below this amount count as "small" spend.
    pub small_amount_threshold: Decimal,
    /// Merchants with at least this many debits are recurring candidates.
    pub recurring_min_count: usize,
    /// Tolerance band (percent) inside which a month-over-month change
    /// reads as "Same" rather than a trend.
    pub trend_tolerance_pct: Decimal,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            top_merchants: 10,
            top_transactions: 10,
            per_month_merchants: 3,
            small_amount_threshold: Decimal::from(100),
            recurring_min_count: 3,
            trend_tolerance_pct: Decimal::ONE,
        }
    }
}

/// Run the analytics engine over a classified record set.
///
/// Fails with [`Error::NoTransactionsFound`] on an empty set before any
/// table is computed. Span of `latest - earliest` at most 30 days selects
/// single-month mode; anything longer selects multi-month.
pub fn analyse(
    records: &[ClassifiedTransaction],
    skipped_lines: u32,
    config: &AnalysisConfig,
) -> Result<AnalysisBundle> {
    let dates = records.iter().map(|r| r.txn.date);
    let (Some(start), Some(end)) = (dates.clone().min(), dates.max()) else {
        return Err(Error::NoTransactionsFound);
    };

    if (end - start).num_days() <= SINGLE_MONTH_MAX_SPAN_DAYS {
        let tables = single_month_tables(records, start, end, config);
        Ok(AnalysisBundle::new(
            AnalysisMode::SingleMonth,
            start,
            end,
            records.len(),
            skipped_lines,
            None,
            None,
            tables,
        ))
    } else {
        monthly::multi_month_bundle(records, start, end, skipped_lines, config)
    }
}

/// All single-month tables, in stable production order.
pub(crate) fn single_month_tables(
    records: &[ClassifiedTransaction],
    start: NaiveDate,
    end: NaiveDate,
    config: &AnalysisConfig,
) -> Vec<Table> {
    let (daily, frequency) = daily_frequency_tables(records, start, end);
    vec![
        summary_table(records, start, end),
        top_merchants_table(records, table_names::TOP_MERCHANTS, config.top_merchants),
        category_table(records, table_names::CATEGORY_HISTOGRAM),
        weekday_table(records),
        time_of_day_table(records),
        daily,
        frequency,
        top_expensive_table(records, config.top_transactions),
        small_spend_table(records, config.small_amount_threshold),
        recurring_table(records, config.recurring_min_count),
    ]
}

/// Guarded division: `None` (a null cell) when the denominator is zero.
pub(crate) fn ratio(numer: Decimal, denom: Decimal) -> Option<Decimal> {
    if denom.is_zero() {
        None
    } else {
        numer.checked_div(denom).map(|d| d.round_dp(2))
    }
}

/// Median of an unordered amount list; `None` when empty.
pub(crate) fn median(amounts: &[Decimal]) -> Option<Decimal> {
    if amounts.is_empty() {
        return None;
    }
    let mut sorted = amounts.to_vec();
    sorted.sort();
    let mid = sorted.len() / 2;
    let value = if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / Decimal::TWO
    };
    Some(value.round_dp(2))
}

fn amounts(records: &[ClassifiedTransaction], direction: Direction) -> Vec<Decimal> {
    records
        .iter()
        .filter(|r| r.txn.direction == direction)
        .map(|r| r.txn.amount)
        .collect()
}

/// Debit totals and counts per normalized merchant, ranked by total
/// descending with merchant name ascending as the deterministic
/// tie-break.
pub(crate) fn merchant_totals(
    records: &[ClassifiedTransaction],
) -> Vec<(String, Decimal, u32)> {
    let mut by_merchant: BTreeMap<&str, (Decimal, u32)> = BTreeMap::new();
    for r in records.iter().filter(|r| r.txn.direction == Direction::Debit) {
        let entry = by_merchant.entry(&r.txn.merchant).or_default();
        entry.0 += r.txn.amount;
        entry.1 += 1;
    }
    let mut ranked: Vec<(String, Decimal, u32)> = by_merchant
        .into_iter()
        .map(|(name, (total, count))| (name.to_string(), total, count))
        .collect();
    // BTreeMap iteration is name-ascending; the stable sort keeps that
    // order within equal totals.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

fn summary_table(records: &[ClassifiedTransaction], start: NaiveDate, end: NaiveDate) -> Table {
    let debits = amounts(records, Direction::Debit);
    let credits = amounts(records, Direction::Credit);
    let total_debit: Decimal = debits.iter().copied().sum();
    let total_credit: Decimal = credits.iter().copied().sum();
    let days_covered = (end - start).num_days() + 1;

    let direction_rows = |label: &str, values: &[Decimal], total: Decimal| {
        vec![
            (format!("total_{}", label), Cell::Amount(total)),
            (format!("{}_count", label), Cell::Int(values.len() as i64)),
            (
                format!("average_{}", label),
                Cell::from(ratio(total, Decimal::from(values.len()))),
            ),
            (format!("median_{}", label), Cell::from(median(values))),
            (
                format!("max_{}", label),
                values.iter().copied().max().map(Cell::Amount).unwrap_or(Cell::Null),
            ),
            (
                format!("min_{}", label),
                values.iter().copied().min().map(Cell::Amount).unwrap_or(Cell::Null),
            ),
        ]
    };

    let mut table = Table::new(table_names::SUMMARY, vec!["metric", "value"]);
    for (metric, value) in direction_rows("debit", &debits, total_debit)
        .into_iter()
        .chain(direction_rows("credit", &credits, total_credit))
    {
        table.push_row(vec![Cell::Text(metric), value]);
    }
    table.push_row(vec![
        Cell::Text("net_flow".into()),
        Cell::Amount(total_credit - total_debit),
    ]);
    table.push_row(vec![
        Cell::Text("total_count".into()),
        Cell::Int(records.len() as i64),
    ]);
    table.push_row(vec![
        Cell::Text("days_covered".into()),
        Cell::Int(days_covered),
    ]);
    // Days with no transactions still count in the denominator.
    table.push_row(vec![
        Cell::Text("average_daily_spend".into()),
        Cell::from(ratio(total_debit, Decimal::from(days_covered))),
    ]);
    table
}

fn top_merchants_table(
    records: &[ClassifiedTransaction],
    name: &'static str,
    limit: usize,
) -> Table {
    let mut table = Table::new(name, vec!["merchant", "total", "count", "average"]);
    for (merchant, total, count) in merchant_totals(records).into_iter().take(limit) {
        table.push_row(vec![
            Cell::Text(merchant),
            Cell::Amount(total),
            Cell::Int(count as i64),
            Cell::from(ratio(total, Decimal::from(count))),
        ]);
    }
    table
}

/// Overall merchant ranking used by the multi-month bundle.
pub(crate) fn overall_top_merchants_table(
    records: &[ClassifiedTransaction],
    limit: usize,
) -> Table {
    top_merchants_table(records, table_names::OVERALL_TOP_MERCHANTS, limit)
}

/// Debit count and sum per category bucket; every bucket is present even
/// when empty, so per-bucket sums always add back up to the debit total.
pub(crate) fn category_table(records: &[ClassifiedTransaction], name: &'static str) -> Table {
    let mut sums: BTreeMap<CategoryBucket, (Decimal, i64)> = BTreeMap::new();
    for r in records.iter().filter(|r| r.txn.direction == Direction::Debit) {
        let entry = sums.entry(r.category).or_default();
        entry.0 += r.txn.amount;
        entry.1 += 1;
    }

    let mut table = Table::new(name, vec!["category", "total", "count"]);
    for bucket in CategoryBucket::ALL {
        let (total, count) = sums.get(&bucket).copied().unwrap_or_default();
        table.push_row(vec![
            Cell::Text(bucket.label().into()),
            Cell::Amount(total),
            Cell::Int(count),
        ]);
    }
    table
}

fn weekday_table(records: &[ClassifiedTransaction]) -> Table {
    let mut table = Table::new(
        table_names::WEEKDAY_SPENDING,
        vec!["weekday", "total", "count"],
    );
    for weekday in WEEKDAYS {
        let mut total = Decimal::ZERO;
        let mut count = 0i64;
        for r in records
            .iter()
            .filter(|r| r.txn.direction == Direction::Debit && r.weekday == weekday)
        {
            total += r.txn.amount;
            count += 1;
        }
        table.push_row(vec![
            Cell::Text(weekday.to_string()),
            Cell::Amount(total),
            Cell::Int(count),
        ]);
    }
    table
}

/// Records without a time are excluded here and only here.
fn time_of_day_table(records: &[ClassifiedTransaction]) -> Table {
    let mut table = Table::new(
        table_names::TIME_OF_DAY_SPENDING,
        vec!["time_of_day", "total", "count"],
    );
    for bucket in TimeOfDay::ALL {
        let mut total = Decimal::ZERO;
        let mut count = 0i64;
        for r in records
            .iter()
            .filter(|r| r.txn.direction == Direction::Debit && r.time_of_day == Some(bucket))
        {
            total += r.txn.amount;
            count += 1;
        }
        table.push_row(vec![
            Cell::Text(bucket.label().into()),
            Cell::Amount(total),
            Cell::Int(count),
        ]);
    }
    table
}

/// Per-day transaction counts over the full observed range (zero-filled)
/// plus the frequency summary. Ties on max/min go to the earliest date.
fn daily_frequency_tables(
    records: &[ClassifiedTransaction],
    start: NaiveDate,
    end: NaiveDate,
) -> (Table, Table) {
    let mut per_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for day in start.iter_days().take_while(|d| *d <= end) {
        per_day.insert(day, 0);
    }
    for r in records {
        if let Some(count) = per_day.get_mut(&r.txn.date) {
            *count += 1;
        }
    }

    let mut daily = Table::new(table_names::DAILY_FREQUENCY, vec!["date", "count"]);
    let mut max: Option<(NaiveDate, i64)> = None;
    let mut min: Option<(NaiveDate, i64)> = None;
    let mut total = 0i64;
    for (&day, &count) in &per_day {
        daily.push_row(vec![Cell::Date(day), Cell::Int(count)]);
        total += count;
        if max.map_or(true, |(_, best)| count > best) {
            max = Some((day, count));
        }
        if min.map_or(true, |(_, worst)| count < worst) {
            min = Some((day, count));
        }
    }

    let mut summary = Table::new(table_names::FREQUENCY_SUMMARY, vec!["metric", "value"]);
    summary.push_row(vec![
        Cell::Text("average_per_day".into()),
        Cell::from(ratio(Decimal::from(total), Decimal::from(per_day.len() as i64))),
    ]);
    if let Some((day, count)) = max {
        summary.push_row(vec![Cell::Text("max_per_day".into()), Cell::Int(count)]);
        summary.push_row(vec![Cell::Text("busiest_day".into()), Cell::Date(day)]);
    }
    if let Some((day, count)) = min {
        summary.push_row(vec![Cell::Text("min_per_day".into()), Cell::Int(count)]);
        summary.push_row(vec![Cell::Text("quietest_day".into()), Cell::Date(day)]);
    }
    (daily, summary)
}

/// All transactions ranked by amount descending; ties keep original
/// parse order (the sort is stable over the encounter-ordered slice).
fn top_expensive_table(records: &[ClassifiedTransaction], limit: usize) -> Table {
    let mut ranked: Vec<&ClassifiedTransaction> = records.iter().collect();
    ranked.sort_by(|a, b| b.txn.amount.cmp(&a.txn.amount));

    let mut table = Table::new(
        table_names::TOP_EXPENSIVE,
        vec!["rank", "date", "merchant", "direction", "amount"],
    );
    for (i, r) in ranked.into_iter().take(limit).enumerate() {
        table.push_row(vec![
            Cell::Int(i as i64 + 1),
            Cell::Date(r.txn.date),
            Cell::Text(r.txn.merchant.clone()),
            Cell::Text(r.txn.direction.as_str().into()),
            Cell::Amount(r.txn.amount),
        ]);
    }
    table
}

/// Small debits that add up, grouped by merchant.
fn small_spend_table(records: &[ClassifiedTransaction], threshold: Decimal) -> Table {
    let small: Vec<ClassifiedTransaction> = records
        .iter()
        .filter(|r| r.txn.direction == Direction::Debit && r.txn.amount < threshold)
        .cloned()
        .collect();

    let mut table = Table::new(
        table_names::SMALL_SPEND_MERCHANTS,
        vec!["merchant", "total", "count"],
    );
    for (merchant, total, count) in merchant_totals(&small) {
        table.push_row(vec![
            Cell::Text(merchant),
            Cell::Amount(total),
            Cell::Int(count as i64),
        ]);
    }
    table
}

/// Merchants hit often enough to look like subscriptions or habits.
fn recurring_table(records: &[ClassifiedTransaction], min_count: usize) -> Table {
    let mut candidates: Vec<(String, Decimal, u32)> = merchant_totals(records)
        .into_iter()
        .filter(|(_, _, count)| *count as usize >= min_count)
        .collect();
    // Rank by how often, then by name.
    candidates.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));

    let mut table = Table::new(
        table_names::RECURRING_MERCHANTS,
        vec!["merchant", "count", "total"],
    );
    for (merchant, total, count) in candidates {
        table.push_row(vec![
            Cell::Text(merchant),
            Cell::Int(count as i64),
            Cell::Amount(total),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::AnalysisMode;
    use crate::normalize::normalize_merchant;
    use crate::types::RawTransaction;
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn record(
        date: &str,
        time: Option<&str>,
        merchant: &str,
        direction: Direction,
        amount: &str,
    ) -> ClassifiedTransaction {
        ClassifiedTransaction::from(RawTransaction {
            date: NaiveDate::from_str(date).unwrap(),
            time: time.map(|t| NaiveTime::from_str(t).unwrap()),
            merchant: normalize_merchant(merchant),
            direction,
            amount: Decimal::from_str(amount).unwrap(),
            reference: None,
            account: None,
        })
    }

    fn scenario() -> Vec<ClassifiedTransaction> {
        vec![
            record("2025-06-01", None, "AmazonIndia", Direction::Debit, "50"),
            record("2025-06-02", None, "AmazonIndia", Direction::Debit, "150"),
            record("2025-06-03", None, "Salary", Direction::Credit, "1000"),
        ]
    }

    fn cell_for<'a>(table: &'a Table, metric: &str) -> &'a Cell {
        &table
            .rows
            .iter()
            .find(|r| r[0] == Cell::Text(metric.into()))
            .unwrap()[1]
    }

    #[test]
    fn test_empty_set_fails_before_any_table() {
        let err = analyse(&[], 0, &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, Error::NoTransactionsFound));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let bundle = analyse(&scenario(), 0, &AnalysisConfig::default()).unwrap();

        assert_eq!(bundle.mode, AnalysisMode::SingleMonth);
        assert_eq!(bundle.total_transactions, 3);

        let summary = bundle.table(table_names::SUMMARY).unwrap();
        assert_eq!(cell_for(summary, "total_debit"), &Cell::Amount(Decimal::from(200)));
        assert_eq!(cell_for(summary, "total_credit"), &Cell::Amount(Decimal::from(1000)));
        assert_eq!(cell_for(summary, "net_flow"), &Cell::Amount(Decimal::from(800)));

        let merchants = bundle.table(table_names::TOP_MERCHANTS).unwrap();
        assert_eq!(merchants.rows[0][0], Cell::Text("Amazon India".into()));
        assert_eq!(merchants.rows[0][1], Cell::Amount(Decimal::from(200)));
        assert_eq!(merchants.rows[0][2], Cell::Int(2));

        let categories = bundle.table(table_names::CATEGORY_HISTOGRAM).unwrap();
        let by_label: Vec<(String, Decimal, i64)> = categories
            .rows
            .iter()
            .map(|r| match (&r[0], &r[1], &r[2]) {
                (Cell::Text(l), Cell::Amount(t), Cell::Int(c)) => (l.clone(), *t, *c),
                other => panic!("unexpected row shape: {:?}", other),
            })
            .collect();
        assert_eq!(by_label[0], ("Under100".into(), Decimal::from(50), 1));
        assert_eq!(by_label[1], ("100-500".into(), Decimal::from(150), 1));
        for (label, total, count) in &by_label[2..] {
            assert_eq!((total, count), (&Decimal::ZERO, &0), "bucket {}", label);
        }
    }

    #[test]
    fn test_mode_selection_30_vs_31_days() {
        let thirty = vec![
            record("2025-06-01", None, "A", Direction::Debit, "10"),
            record("2025-07-01", None, "A", Direction::Debit, "10"),
        ];
        assert_eq!(
            analyse(&thirty, 0, &AnalysisConfig::default()).unwrap().mode,
            AnalysisMode::SingleMonth
        );

        let thirty_one = vec![
            record("2025-06-01", None, "A", Direction::Debit, "10"),
            record("2025-07-02", None, "A", Direction::Debit, "10"),
        ];
        assert_eq!(
            analyse(&thirty_one, 0, &AnalysisConfig::default()).unwrap().mode,
            AnalysisMode::MultiMonth
        );
    }

    #[test]
    fn test_single_date_runs_single_month() {
        let one = vec![record("2025-06-05", None, "A", Direction::Debit, "10")];
        let bundle = analyse(&one, 0, &AnalysisConfig::default()).unwrap();
        assert_eq!(bundle.mode, AnalysisMode::SingleMonth);
        assert_eq!(bundle.date_range_start, bundle.date_range_end);
    }

    #[test]
    fn test_summary_empty_direction_uses_sentinel() {
        let debit_only = vec![record("2025-06-01", None, "A", Direction::Debit, "10")];
        let bundle = analyse(&debit_only, 0, &AnalysisConfig::default()).unwrap();
        let summary = bundle.table(table_names::SUMMARY).unwrap();
        assert_eq!(cell_for(summary, "average_credit"), &Cell::Null);
        assert_eq!(cell_for(summary, "median_credit"), &Cell::Null);
        assert_eq!(cell_for(summary, "max_credit"), &Cell::Null);
        assert_eq!(cell_for(summary, "total_credit"), &Cell::Amount(Decimal::ZERO));
    }

    #[test]
    fn test_category_sums_cover_debit_total() {
        let records = vec![
            record("2025-06-01", None, "A", Direction::Debit, "99.99"),
            record("2025-06-01", None, "B", Direction::Debit, "100"),
            record("2025-06-02", None, "C", Direction::Debit, "750"),
            record("2025-06-02", None, "D", Direction::Debit, "4999.99"),
            record("2025-06-03", None, "E", Direction::Debit, "5000"),
        ];
        let table = category_table(&records, table_names::CATEGORY_HISTOGRAM);
        let bucket_sum: Decimal = table
            .rows
            .iter()
            .map(|r| match &r[1] {
                Cell::Amount(d) => *d,
                _ => Decimal::ZERO,
            })
            .sum();
        assert_eq!(bucket_sum, Decimal::from_str("10949.98").unwrap());
    }

    #[test]
    fn test_merchant_tie_breaks_by_name() {
        let records = vec![
            record("2025-06-01", None, "Zomato", Direction::Debit, "100"),
            record("2025-06-01", None, "Blinkit", Direction::Debit, "100"),
        ];
        let ranked = merchant_totals(&records);
        assert_eq!(ranked[0].0, "Blinkit");
        assert_eq!(ranked[1].0, "Zomato");
    }

    #[test]
    fn test_daily_frequency_zero_fills_and_earliest_tie_wins() {
        let records = vec![
            record("2025-06-01", None, "A", Direction::Debit, "10"),
            record("2025-06-03", None, "A", Direction::Debit, "10"),
        ];
        let (daily, summary) = daily_frequency_tables(
            &records,
            NaiveDate::from_str("2025-06-01").unwrap(),
            NaiveDate::from_str("2025-06-03").unwrap(),
        );
        assert_eq!(daily.rows.len(), 3);
        assert_eq!(daily.rows[1][1], Cell::Int(0)); // June 2 zero-filled

        // Max count of 1 is shared by June 1 and June 3: earliest wins.
        assert_eq!(
            cell_for(&summary, "busiest_day"),
            &Cell::Date(NaiveDate::from_str("2025-06-01").unwrap())
        );
        assert_eq!(
            cell_for(&summary, "quietest_day"),
            &Cell::Date(NaiveDate::from_str("2025-06-02").unwrap())
        );
    }

    #[test]
    fn test_top_expensive_ties_keep_parse_order() {
        let records = vec![
            record("2025-06-01", None, "First", Direction::Debit, "500"),
            record("2025-06-02", None, "Second", Direction::Debit, "500"),
            record("2025-06-03", None, "Big", Direction::Credit, "900"),
        ];
        let table = top_expensive_table(&records, 10);
        assert_eq!(table.rows[0][2], Cell::Text("Big".into()));
        assert_eq!(table.rows[1][2], Cell::Text("First".into()));
        assert_eq!(table.rows[2][2], Cell::Text("Second".into()));
    }

    #[test]
    fn test_savings_tables() {
        let config = AnalysisConfig::default();
        let records = vec![
            record("2025-06-01", None, "ChaiPoint", Direction::Debit, "30"),
            record("2025-06-02", None, "ChaiPoint", Direction::Debit, "30"),
            record("2025-06-03", None, "ChaiPoint", Direction::Debit, "30"),
            record("2025-06-04", None, "BigStore", Direction::Debit, "2500"),
        ];
        let small = small_spend_table(&records, config.small_amount_threshold);
        assert_eq!(small.rows.len(), 1);
        assert_eq!(small.rows[0][0], Cell::Text("Chai Point".into()));
        assert_eq!(small.rows[0][1], Cell::Amount(Decimal::from(90)));
        assert_eq!(small.rows[0][2], Cell::Int(3));

        let recurring = recurring_table(&records, config.recurring_min_count);
        assert_eq!(recurring.rows.len(), 1);
        assert_eq!(recurring.rows[0][0], Cell::Text("Chai Point".into()));
        assert_eq!(recurring.rows[0][1], Cell::Int(3));
    }

    #[test]
    fn test_time_of_day_excludes_timeless_records() {
        let records = vec![
            record("2025-06-01", Some("19:30:00"), "A", Direction::Debit, "100"),
            record("2025-06-01", None, "B", Direction::Debit, "200"),
        ];
        let table = time_of_day_table(&records);
        let evening = table
            .rows
            .iter()
            .find(|r| r[0] == Cell::Text("Evening".into()))
            .unwrap();
        assert_eq!(evening[1], Cell::Amount(Decimal::from(100)));
        let total: i64 = table
            .rows
            .iter()
            .map(|r| match r[2] {
                Cell::Int(n) => n,
                _ => 0,
            })
            .sum();
        assert_eq!(total, 1); // the timeless record is excluded
    }

    #[test]
    fn test_median() {
        let d = |s: &str| Decimal::from_str(s).unwrap();
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[d("5")]), Some(d("5")));
        assert_eq!(median(&[d("1"), d("9"), d("3")]), Some(d("3")));
        assert_eq!(median(&[d("1"), d("2"), d("3"), d("4")]), Some(d("2.50")));
    }
}
