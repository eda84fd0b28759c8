// Copyright (c) 2025 Spendleaf Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{self, Write};

use anyhow::Result;
use chrono::Local;
use serde::Serialize;

use crate::models::NewExpense;
use crate::store::ExpenseStore;
use crate::utils::{maybe_print_json, parse_date, parse_month, pretty_table};

pub fn handle<S: ExpenseStore>(store: &mut S, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add<S: ExpenseStore>(store: &mut S, sub: &clap::ArgMatches) -> Result<()> {
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };
    let draft = NewExpense {
        owner_id: sub.get_one::<String>("user").unwrap().to_string(),
        name: sub.get_one::<String>("name").unwrap().to_string(),
        amount: sub.get_one::<String>("amount").unwrap().to_string(),
        category: sub.get_one::<String>("category").unwrap().to_string(),
        date,
        description: sub
            .get_one::<String>("note")
            .map(|s| s.to_string())
            .unwrap_or_default(),
    };
    let created = store.create(draft)?;
    println!(
        "Recorded '{}' ({}) on {} (id: {})",
        created.name,
        created.amount_display(),
        created.date,
        created.id
    );
    Ok(())
}

fn list<S: ExpenseStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.name.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.note.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Date", "Name", "Category", "Amount", "Note", "Id"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: String,
    pub date: String,
    pub name: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

/// Fetch one owner's records and apply the list filters.
///
/// Filtering happens in memory after the bulk read, mirroring how the
/// screens that consume the store work with their local record set.
pub fn query_rows<S: ExpenseStore>(store: &S, sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let owner = sub.get_one::<String>("user").unwrap();
    let mut records = store.get_all(owner)?;

    if let Some(month) = sub.get_one::<String>("month") {
        let month = parse_month(month)?;
        records.retain(|e| e.date.format("%Y-%m").to_string() == month);
    }
    if let Some(cat) = sub.get_one::<String>("category") {
        let cat = cat.to_ascii_lowercase();
        records.retain(|e| e.category.eq_ignore_ascii_case(&cat));
    }
    if let Some(limit) = sub.get_one::<usize>("limit") {
        records.truncate(*limit);
    }

    Ok(records
        .into_iter()
        .map(|e| ExpenseRow {
            id: e.id.clone(),
            date: e.date.to_string(),
            name: e.name.clone(),
            category: e.category.clone(),
            amount: e.amount_display(),
            note: e.description.clone(),
        })
        .collect())
}

fn show<S: ExpenseStore>(store: &S, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let expense = store.get(id)?;
    let rows = vec![
        vec!["Name".to_string(), expense.name.clone()],
        vec!["Amount".to_string(), expense.amount_display()],
        vec!["Category".to_string(), expense.category_kind().label().to_string()],
        vec!["Date".to_string(), expense.date.to_string()],
        vec!["Note".to_string(), expense.description.clone()],
        vec!["Owner".to_string(), expense.owner_id.clone()],
    ];
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}

fn remove<S: ExpenseStore>(store: &mut S, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let owner = sub.get_one::<String>("user").unwrap();
    if !sub.get_flag("yes") {
        print!("Permanently delete expense {}? [y/N] ", id);
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        if !matches!(line.trim(), "y" | "Y" | "yes") {
            println!("Kept expense {}", id);
            return Ok(());
        }
    }
    store.delete(id, owner)?;
    println!("Deleted expense {}", id);
    Ok(())
}
