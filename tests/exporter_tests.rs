// Copyright (c) 2025 Spendleaf Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use spendleaf::models::NewExpense;
use spendleaf::store::{ExpenseStore, SqliteStore};
use spendleaf::{cli, commands::exporter};
use tempfile::tempdir;

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
    SqliteStore::new(conn)
}

fn export_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["spendleaf", "export", "expenses"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        return export_m.clone();
    }
    panic!("no export subcommand");
}

#[test]
fn export_expenses_writes_pretty_json() {
    let mut store = setup();
    let created = store
        .create(NewExpense {
            owner_id: "u1".to_string(),
            name: "Corner Shop".to_string(),
            amount: "12.34".to_string(),
            category: "dining".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            description: "Weekly run".to_string(),
        })
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&["--user", "u1", "--format", "json", "--out", &out_str]);
    exporter::handle(&store, &export_m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], created.id.as_str());
    assert_eq!(arr[0]["date"], "2025-01-02");
    assert_eq!(arr[0]["name"], "Corner Shop");
    assert_eq!(arr[0]["category"], "dining");
    assert_eq!(arr[0]["amount"], "12.34");
    assert_eq!(arr[0]["note"], "Weekly run");
}

#[test]
fn export_expenses_writes_csv_with_header() {
    let mut store = setup();
    store
        .create(NewExpense {
            owner_id: "u1".to_string(),
            name: "Corner Shop".to_string(),
            amount: "12.34".to_string(),
            category: "dining".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            description: String::new(),
        })
        .unwrap();

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&["--user", "u1", "--format", "csv", "--out", &out_str]);
    exporter::handle(&store, &export_m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "id,date,name,category,amount,note");
    assert!(lines.next().unwrap().contains("Corner Shop"));
}

#[test]
fn export_expenses_rejects_unknown_format() {
    let store = setup();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    let export_m = export_matches(&["--user", "u1", "--format", "xml", "--out", &out_str]);
    assert!(exporter::handle(&store, &export_m).is_err());
    assert!(!out_path.exists());
}
