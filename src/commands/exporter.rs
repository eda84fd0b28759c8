// Copyright (c) 2025 Spendleaf Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::store::ExpenseStore;

pub fn handle<S: ExpenseStore>(store: &S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(store, sub),
        _ => Ok(()),
    }
}

fn export_expenses<S: ExpenseStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let owner = sub.get_one::<String>("user").unwrap();

    let records = store.get_all(owner)?;

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "name", "category", "amount", "note"])?;
            for e in &records {
                wtr.write_record([
                    e.id.as_str(),
                    &e.date.to_string(),
                    e.name.as_str(),
                    e.category.as_str(),
                    e.amount.as_str(),
                    e.description.as_str(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = records
                .iter()
                .map(|e| {
                    json!({
                        "id": e.id,
                        "date": e.date.to_string(),
                        "name": e.name,
                        "category": e.category,
                        "amount": e.amount,
                        "note": e.description,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            anyhow::bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported expenses to {}", out);
    Ok(())
}
