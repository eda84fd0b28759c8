// Copyright (c) 2025 Spendleaf Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, Row, params};
use uuid::Uuid;

use crate::error::Error;
use crate::models::{Expense, NewExpense};

/// Handles creation, retrieval, and deletion of expense records.
///
/// Records are owner-scoped: bulk reads take the owner and `delete` refuses
/// to remove a record the caller does not own. There is no update operation.
pub trait ExpenseStore {
    /// Validate `draft` and persist it under a fresh id.
    fn create(&mut self, draft: NewExpense) -> Result<Expense, Error>;

    /// Retrieve a single record by id.
    fn get(&self, id: &str) -> Result<Expense, Error>;

    /// Retrieve every record belonging to `owner_id`, most recent first.
    fn get_all(&self, owner_id: &str) -> Result<Vec<Expense>, Error>;

    /// Delete a record the caller owns.
    ///
    /// Returns [`Error::NotFound`] for unknown ids and
    /// [`Error::Unauthorized`] when the record belongs to someone else.
    fn delete(&mut self, id: &str, owner_id: &str) -> Result<(), Error>;
}

/// SQLite-backed store. Amounts are persisted as TEXT so that whatever is
/// already in the table round-trips unchanged, even when it no longer parses
/// as a decimal.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn read_expense(r: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: r.get(0)?,
        owner_id: r.get(1)?,
        name: r.get(2)?,
        amount: r.get(3)?,
        category: r.get(4)?,
        date: r.get::<_, NaiveDate>(5)?,
        description: r.get::<_, Option<String>>(6)?.unwrap_or_default(),
    })
}

impl ExpenseStore for SqliteStore {
    fn create(&mut self, draft: NewExpense) -> Result<Expense, Error> {
        draft.validate(Local::now().date_naive())?;
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            owner_id: draft.owner_id,
            name: draft.name.trim().to_string(),
            amount: draft.amount.trim().to_string(),
            category: draft.category.trim().to_ascii_lowercase(),
            date: draft.date,
            description: draft.description,
        };
        self.conn.execute(
            "INSERT INTO expenses(id, owner_id, name, amount, category, date, description)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                expense.id,
                expense.owner_id,
                expense.name,
                expense.amount,
                expense.category,
                expense.date,
                expense.description
            ],
        )?;
        Ok(expense)
    }

    fn get(&self, id: &str) -> Result<Expense, Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, owner_id, name, amount, category, date, description
             FROM expenses WHERE id=?1",
        )?;
        stmt.query_row(params![id], read_expense)
            .optional()?
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    fn get_all(&self, owner_id: &str) -> Result<Vec<Expense>, Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, owner_id, name, amount, category, date, description
             FROM expenses WHERE owner_id=?1 ORDER BY date DESC, rowid DESC",
        )?;
        let rows = stmt.query_map(params![owner_id], read_expense)?;
        let mut data = Vec::new();
        for row in rows {
            data.push(row?);
        }
        Ok(data)
    }

    fn delete(&mut self, id: &str, owner_id: &str) -> Result<(), Error> {
        let owner: Option<String> = self
            .conn
            .query_row(
                "SELECT owner_id FROM expenses WHERE id=?1",
                params![id],
                |r| r.get(0),
            )
            .optional()?;
        match owner {
            None => Err(Error::NotFound(id.to_string())),
            Some(o) if o != owner_id => Err(Error::Unauthorized),
            Some(_) => {
                self.conn
                    .execute("DELETE FROM expenses WHERE id=?1", params![id])?;
                Ok(())
            }
        }
    }
}
