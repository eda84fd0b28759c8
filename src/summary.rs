// Copyright (c) 2025 Spendleaf Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Expense;

/// Maximum number of entries in the recent-activity preview.
pub const RECENT_LIMIT: usize = 5;

/// Financial overview for one owner's records relative to a reference date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: Decimal,
    pub current_month_total: Decimal,
    pub previous_month_total: Decimal,
    pub recent: Vec<Expense>,
}

/// Compute spending totals and the recent-activity preview.
///
/// Pure: the reference date is always supplied by the caller, so repeated
/// calls over the same records give the same answer. Amounts that do not
/// parse contribute zero to every total but the record still competes for a
/// slot in `recent`.
pub fn summarize(records: &[Expense], as_of: NaiveDate) -> Summary {
    let (prev_year, prev_month) = previous_month(as_of);

    let mut total = Decimal::ZERO;
    let mut current_month_total = Decimal::ZERO;
    let mut previous_month_total = Decimal::ZERO;

    for rec in records {
        let amount = rec.amount_value();
        total += amount;
        if rec.date.year() == as_of.year() && rec.date.month() == as_of.month() {
            current_month_total += amount;
        } else if rec.date.year() == prev_year && rec.date.month() == prev_month {
            previous_month_total += amount;
        }
    }

    // Stable sort: records sharing a date keep their input order.
    let mut recent: Vec<Expense> = records.to_vec();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_LIMIT);

    Summary {
        total,
        current_month_total,
        previous_month_total,
        recent,
    }
}

/// Year and month of the calendar month before `as_of`, rolling the year
/// back across January.
fn previous_month(as_of: NaiveDate) -> (i32, u32) {
    if as_of.month() == 1 {
        (as_of.year() - 1, 12)
    } else {
        (as_of.year(), as_of.month() - 1)
    }
}
