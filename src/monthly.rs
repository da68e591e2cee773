//! Multi-month analysis: calendar-month grouping, month-over-month
//! trends and cumulative series.
//!
//! Months are keyed by `(year, month)` so ordering survives year
//! boundaries, and each per-month computation reuses the single-month
//! builders from [`crate::analytics`] with a `month` column prepended.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::analytics::{category_table, overall_top_merchants_table, ratio, AnalysisConfig};
use crate::bundle::{table_names, AnalysisBundle, AnalysisMode, Cell, Table};
use crate::classify::ClassifiedTransaction;
use crate::error::Result;
use crate::types::Direction;

/// Direction of a month-over-month spend change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendIndicator {
    Increase,
    Decrease,
    /// Change within the configured tolerance band.
    Same,
    /// No meaningful base: the previous month had zero debit.
    New,
}

impl TrendIndicator {
    pub fn label(&self) -> &'static str {
        match self {
            TrendIndicator::Increase => "Increase",
            TrendIndicator::Decrease => "Decrease",
            TrendIndicator::Same => "Same",
            TrendIndicator::New => "New",
        }
    }
}

/// One calendar month's records, in original parse order.
struct MonthGroup {
    label: String,
    records: Vec<ClassifiedTransaction>,
}

impl MonthGroup {
    fn debit_total(&self) -> Decimal {
        self.records
            .iter()
            .filter(|r| r.txn.direction == Direction::Debit)
            .map(|r| r.txn.amount)
            .sum()
    }

    fn credit_total(&self) -> Decimal {
        self.records
            .iter()
            .filter(|r| r.txn.direction == Direction::Credit)
            .map(|r| r.txn.amount)
            .sum()
    }
}

/// Group records into calendar months, earliest month first.
fn month_groups(records: &[ClassifiedTransaction]) -> Vec<MonthGroup> {
    let mut by_month: BTreeMap<(i32, u32), Vec<ClassifiedTransaction>> = BTreeMap::new();
    for r in records {
        by_month
            .entry((r.txn.date.year(), r.txn.date.month()))
            .or_default()
            .push(r.clone());
    }
    by_month
        .into_values()
        .map(|records| MonthGroup {
            // Non-empty by construction.
            label: records[0].txn.date.format("%B %Y").to_string(),
            records,
        })
        .collect()
}

/// Run the single-month builders independently per calendar month and
/// merge the results row-wise, each row prefixed with its month label.
fn per_month_tables(groups: &[MonthGroup], config: &AnalysisConfig) -> Vec<Table> {
    let mut merged: Vec<Table> = Vec::new();
    for group in groups {
        let dates = group.records.iter().map(|r| r.txn.date);
        let (Some(start), Some(end)) = (dates.clone().min(), dates.max()) else {
            continue;
        };
        let mut tables =
            crate::analytics::single_month_tables(&group.records, start, end, config);
        for table in &mut tables {
            table.prepend_month(&group.label);
        }
        if merged.is_empty() {
            merged = tables;
        } else {
            for (acc, table) in merged.iter_mut().zip(tables) {
                acc.extend_rows(table);
            }
        }
    }
    merged
}

/// Build the full multi-month bundle: every single-month table computed
/// per month, then the cross-month views.
pub(crate) fn multi_month_bundle(
    records: &[ClassifiedTransaction],
    start: NaiveDate,
    end: NaiveDate,
    skipped_lines: u32,
    config: &AnalysisConfig,
) -> Result<AnalysisBundle> {
    let groups = month_groups(records);

    let mut tables = per_month_tables(&groups, config);
    tables.extend([
        monthly_totals_table(&groups),
        month_over_month_table(&groups, config.trend_tolerance_pct),
        monthly_top_merchants_table(&groups, config.per_month_merchants),
        monthly_biggest_table(&groups),
        overall_top_merchants_table(records, config.top_merchants),
        category_table(records, table_names::OVERALL_CATEGORY_HISTOGRAM),
        cumulative_daily_table(records),
        cumulative_monthly_table(&groups),
    ]);

    let (highest, lowest) = extreme_months(&groups);
    Ok(AnalysisBundle::new(
        AnalysisMode::MultiMonth,
        start,
        end,
        records.len(),
        skipped_lines,
        highest,
        lowest,
        tables,
    ))
}

/// Highest- and lowest-debit month labels; ties go to the earlier month.
fn extreme_months(groups: &[MonthGroup]) -> (Option<String>, Option<String>) {
    let mut highest: Option<(&MonthGroup, Decimal)> = None;
    let mut lowest: Option<(&MonthGroup, Decimal)> = None;
    for group in groups {
        let total = group.debit_total();
        if highest.map_or(true, |(_, best)| total > best) {
            highest = Some((group, total));
        }
        if lowest.map_or(true, |(_, worst)| total < worst) {
            lowest = Some((group, total));
        }
    }
    (
        highest.map(|(g, _)| g.label.clone()),
        lowest.map(|(g, _)| g.label.clone()),
    )
}

fn monthly_totals_table(groups: &[MonthGroup]) -> Table {
    let mut table = Table::new(
        table_names::MONTHLY_TOTALS,
        vec!["month", "debit_total", "credit_total", "net_flow", "count"],
    );
    for group in groups {
        let debit = group.debit_total();
        let credit = group.credit_total();
        table.push_row(vec![
            Cell::Text(group.label.clone()),
            Cell::Amount(debit),
            Cell::Amount(credit),
            Cell::Amount(credit - debit),
            Cell::Int(group.records.len() as i64),
        ]);
    }
    table
}

/// Debit change against the previous month. The first month and any
/// month following a zero-debit month have no meaningful percentage;
/// both render a null cell, the latter with a "New" trend.
fn month_over_month_table(groups: &[MonthGroup], tolerance_pct: Decimal) -> Table {
    let mut table = Table::new(
        table_names::MONTH_OVER_MONTH,
        vec!["month", "debit_total", "change", "change_pct", "trend"],
    );
    let mut previous: Option<Decimal> = None;
    for group in groups {
        let debit = group.debit_total();
        let (change, change_pct, trend) = match previous {
            None => (Cell::Null, Cell::Null, Cell::Null),
            Some(prev) => {
                let diff = debit - prev;
                let pct = ratio(diff * Decimal::ONE_HUNDRED, prev);
                let trend = match pct {
                    None => TrendIndicator::New,
                    Some(p) if p.abs() <= tolerance_pct => TrendIndicator::Same,
                    Some(p) if p > Decimal::ZERO => TrendIndicator::Increase,
                    Some(_) => TrendIndicator::Decrease,
                };
                (
                    Cell::Amount(diff),
                    Cell::from(pct),
                    Cell::Text(trend.label().into()),
                )
            }
        };
        table.push_row(vec![
            Cell::Text(group.label.clone()),
            Cell::Amount(debit),
            change,
            change_pct,
            trend,
        ]);
        previous = Some(debit);
    }
    table
}

fn monthly_top_merchants_table(groups: &[MonthGroup], per_month: usize) -> Table {
    let mut table = Table::new(
        table_names::MONTHLY_TOP_MERCHANTS,
        vec!["month", "merchant", "total", "count", "average"],
    );
    for group in groups {
        for (merchant, total, count) in crate::analytics::merchant_totals(&group.records)
            .into_iter()
            .take(per_month)
        {
            table.push_row(vec![
                Cell::Text(group.label.clone()),
                Cell::Text(merchant),
                Cell::Amount(total),
                Cell::Int(count as i64),
                Cell::from(ratio(total, Decimal::from(count))),
            ]);
        }
    }
    table
}

/// The single largest transaction per month; amount ties keep the
/// earliest record in parse order.
fn monthly_biggest_table(groups: &[MonthGroup]) -> Table {
    let mut table = Table::new(
        table_names::MONTHLY_BIGGEST_TRANSACTION,
        vec!["month", "date", "merchant", "direction", "amount"],
    );
    for group in groups {
        let mut biggest: Option<&ClassifiedTransaction> = None;
        for r in &group.records {
            if biggest.map_or(true, |b| r.txn.amount > b.txn.amount) {
                biggest = Some(r);
            }
        }
        if let Some(r) = biggest {
            table.push_row(vec![
                Cell::Text(group.label.clone()),
                Cell::Date(r.txn.date),
                Cell::Text(r.txn.merchant.clone()),
                Cell::Text(r.txn.direction.as_str().into()),
                Cell::Amount(r.txn.amount),
            ]);
        }
    }
    table
}

/// Running debit total per active day. The cumulative column is
/// non-decreasing by construction.
fn cumulative_daily_table(records: &[ClassifiedTransaction]) -> Table {
    let mut per_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for r in records {
        let debit = per_day.entry(r.txn.date).or_default();
        if r.txn.direction == Direction::Debit {
            *debit += r.txn.amount;
        }
    }

    let mut table = Table::new(
        table_names::CUMULATIVE_DAILY,
        vec!["date", "debit_total", "cumulative"],
    );
    let mut running = Decimal::ZERO;
    for (day, debit) in per_day {
        running += debit;
        table.push_row(vec![
            Cell::Date(day),
            Cell::Amount(debit),
            Cell::Amount(running),
        ]);
    }
    table
}

fn cumulative_monthly_table(groups: &[MonthGroup]) -> Table {
    let mut table = Table::new(
        table_names::CUMULATIVE_MONTHLY,
        vec!["month", "debit_total", "cumulative"],
    );
    let mut running = Decimal::ZERO;
    for group in groups {
        let debit = group.debit_total();
        running += debit;
        table.push_row(vec![
            Cell::Text(group.label.clone()),
            Cell::Amount(debit),
            Cell::Amount(running),
        ]);
    }
    table
}
