//! Transaction classification.
//!
//! Pure enrichment: one [`RawTransaction`] in, one
//! [`ClassifiedTransaction`] out. Category and time-of-day buckets are
//! total over their domains — every valid record lands in exactly one
//! bucket — so the analytics tables can always be zero-filled over the
//! full bucket lists.

use chrono::{Datelike, NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;

use crate::types::RawTransaction;

/// Fixed amount-range partition of `[0, ∞)`.
///
/// Lower bounds are inclusive, upper bounds exclusive: an amount exactly
/// on a boundary belongs to the upper bucket (100 is "100-500").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryBucket {
    Under100,
    From100To500,
    From500To1000,
    From1000To5000,
    Above5000,
}

impl CategoryBucket {
    /// All buckets in ascending amount order, for zero-filled tables.
    pub const ALL: [CategoryBucket; 5] = [
        CategoryBucket::Under100,
        CategoryBucket::From100To500,
        CategoryBucket::From500To1000,
        CategoryBucket::From1000To5000,
        CategoryBucket::Above5000,
    ];

    /// Stable label used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryBucket::Under100 => "Under100",
            CategoryBucket::From100To500 => "100-500",
            CategoryBucket::From500To1000 => "500-1000",
            CategoryBucket::From1000To5000 => "1000-5000",
            CategoryBucket::Above5000 => "Above5000",
        }
    }

    /// Bucket for an amount.
    pub fn from_amount(amount: Decimal) -> CategoryBucket {
        if amount < Decimal::from(100) {
            CategoryBucket::Under100
        } else if amount < Decimal::from(500) {
            CategoryBucket::From100To500
        } else if amount < Decimal::from(1000) {
            CategoryBucket::From500To1000
        } else if amount < Decimal::from(5000) {
            CategoryBucket::From1000To5000
        } else {
            CategoryBucket::Above5000
        }
    }
}

/// Time-of-day partition of the 24h clock. Night wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeOfDay {
    /// 05:00–11:59
    Morning,
    /// 12:00–16:59
    Afternoon,
    /// 17:00–20:59
    Evening,
    /// 21:00–04:59
    Night,
}

impl TimeOfDay {
    /// All buckets in day order, for zero-filled tables.
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Stable label used in tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }

    /// Bucket for a local time.
    pub fn from_time(time: NaiveTime) -> TimeOfDay {
        match time.hour() {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

/// A transaction enriched with its derived classification fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedTransaction {
    /// The underlying parsed record.
    pub txn: RawTransaction,

    /// Amount-range bucket.
    pub category: CategoryBucket,

    /// Day of week derived from the transaction date.
    pub weekday: Weekday,

    /// Time-of-day bucket; `None` when the vendor format carried no time.
    /// Such records are excluded from time-of-day tables only.
    pub time_of_day: Option<TimeOfDay>,
}

impl From<RawTransaction> for ClassifiedTransaction {
    fn from(txn: RawTransaction) -> Self {
        ClassifiedTransaction {
            category: CategoryBucket::from_amount(txn.amount),
            weekday: txn.date.weekday(),
            time_of_day: txn.time.map(TimeOfDay::from_time),
            txn,
        }
    }
}

/// Weekdays in table order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];
