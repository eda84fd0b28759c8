// Copyright (c) 2025 Spendleaf Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// The errors the store surface can return.
///
/// The dashboard aggregation never produces one of these: malformed data on
/// records that are already persisted is coerced (zero amount, fallback
/// category) instead of propagated.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The backing store could not be reached or failed mid-query.
    #[error("could not retrieve expenses: {0}")]
    Retrieval(String),

    /// No record exists with the requested id.
    #[error("no expense found with id '{0}'")]
    NotFound(String),

    /// The record exists but belongs to a different owner.
    #[error("the expense belongs to another user")]
    Unauthorized,

    /// An empty string was used as the expense name.
    #[error("expense name cannot be empty")]
    EmptyName,

    /// The amount on a creation draft did not parse as a decimal.
    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    /// Amounts record spending and must be strictly positive.
    #[error("amount must be greater than zero, got {0}")]
    NonPositiveAmount(Decimal),

    /// Expenses record events that already happened; future dates are not
    /// allowed at creation time.
    #[error("{0} is in the future, which is not allowed")]
    FutureDate(NaiveDate),

    /// The category identifier on a creation draft is not in the known set.
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound(String::new()),
            other => Error::Retrieval(other.to_string()),
        }
    }
}
