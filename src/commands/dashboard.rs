// Copyright (c) 2025 Spendleaf Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::store::ExpenseStore;
use crate::summary::summarize;
use crate::utils::{fmt_amount, parse_date, pretty_table};

pub fn handle<S: ExpenseStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    let owner = m.get_one::<String>("user").unwrap();
    let as_of = match m.get_one::<String>("as-of") {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let records = store.get_all(owner)?;
    let summary = summarize(&records, as_of);

    if m.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Financial overview for {} (as of {})", owner, as_of);
    println!(
        "{}",
        pretty_table(
            &["Total", "This Month", "Last Month"],
            vec![vec![
                fmt_amount(&summary.total),
                fmt_amount(&summary.current_month_total),
                fmt_amount(&summary.previous_month_total),
            ]],
        )
    );

    if summary.recent.is_empty() {
        println!("No recent activity");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = summary
        .recent
        .iter()
        .map(|e| {
            vec![
                e.date.to_string(),
                e.name.clone(),
                e.category_kind().label().to_string(),
                e.amount_display(),
            ]
        })
        .collect();
    println!("Recent activity");
    println!(
        "{}",
        pretty_table(&["Date", "Name", "Category", "Amount"], rows)
    );
    Ok(())
}
