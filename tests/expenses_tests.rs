// Copyright (c) 2025 Spendleaf Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use spendleaf::models::NewExpense;
use spendleaf::store::{ExpenseStore, SqliteStore};
use spendleaf::{cli, commands::expenses};

fn setup() -> SqliteStore {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        r#"
        CREATE TABLE expenses(
            id TEXT PRIMARY KEY,
            owner_id TEXT NOT NULL,
            name TEXT NOT NULL,
            amount TEXT NOT NULL,
            category TEXT NOT NULL,
            date TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        );
        "#,
    )
    .unwrap();
    let mut store = SqliteStore::new(conn);
    let fixtures = [
        ("Coffee", "3.50", "dining", "2025-01-03"),
        ("Bus pass", "25", "mobility", "2025-01-15"),
        ("Rent", "800", "shelter", "2025-02-01"),
    ];
    for (name, amount, category, date) in fixtures {
        store
            .create(NewExpense {
                owner_id: "u1".to_string(),
                name: name.to_string(),
                amount: amount.to_string(),
                category: category.to_string(),
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                description: String::new(),
            })
            .unwrap();
    }
    store
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["spendleaf", "expense", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("expense", exp_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = exp_m.subcommand() {
            return list_m.clone();
        }
        panic!("no list subcommand");
    }
    panic!("no expense subcommand");
}

#[test]
fn list_limit_respected() {
    let store = setup();
    let list_m = list_matches(&["--user", "u1", "--limit", "2"]);
    let rows = expenses::query_rows(&store, &list_m).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-02-01");
    assert_eq!(rows[0].name, "Rent");
}

#[test]
fn list_filters_by_month() {
    let store = setup();
    let list_m = list_matches(&["--user", "u1", "--month", "2025-01"]);
    let rows = expenses::query_rows(&store, &list_m).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.date.starts_with("2025-01")));
}

#[test]
fn list_filters_by_category() {
    let store = setup();
    let list_m = list_matches(&["--user", "u1", "--category", "mobility"]);
    let rows = expenses::query_rows(&store, &list_m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Bus pass");
    assert_eq!(rows[0].amount, "25.00");
}

#[test]
fn list_is_empty_for_other_owner() {
    let store = setup();
    let list_m = list_matches(&["--user", "someone-else"]);
    let rows = expenses::query_rows(&store, &list_m).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn list_rejects_bad_month() {
    let store = setup();
    let list_m = list_matches(&["--user", "u1", "--month", "January"]);
    assert!(expenses::query_rows(&store, &list_m).is_err());
}
