// Copyright (c) 2025 Spendleaf Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The fixed set of spending categories.
///
/// Records may carry identifiers outside this set (older data, other
/// writers); lookups fall back to [`Category::Miscellaneous`] rather than
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dining,
    Mobility,
    Shelter,
    Services,
    Recreation,
    Purchases,
    Care,
    Studies,
    Trips,
    Grooming,
    Giving,
    Miscellaneous,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Dining,
        Category::Mobility,
        Category::Shelter,
        Category::Services,
        Category::Recreation,
        Category::Purchases,
        Category::Care,
        Category::Studies,
        Category::Trips,
        Category::Grooming,
        Category::Giving,
        Category::Miscellaneous,
    ];

    /// Canonical identifier as stored on records.
    pub fn id(self) -> &'static str {
        match self {
            Category::Dining => "dining",
            Category::Mobility => "mobility",
            Category::Shelter => "shelter",
            Category::Services => "services",
            Category::Recreation => "recreation",
            Category::Purchases => "purchases",
            Category::Care => "care",
            Category::Studies => "studies",
            Category::Trips => "trips",
            Category::Grooming => "grooming",
            Category::Giving => "giving",
            Category::Miscellaneous => "miscellaneous",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Dining => "Dining & Takeout",
            Category::Mobility => "Mobility & Fuel",
            Category::Shelter => "Shelter & Rent",
            Category::Services => "Services & Subscriptions",
            Category::Recreation => "Recreation & Hobbies",
            Category::Purchases => "Purchases & Apparel",
            Category::Care => "Care & Fitness",
            Category::Studies => "Studies & Courses",
            Category::Trips => "Trips & Vacations",
            Category::Grooming => "Grooming & Beauty",
            Category::Giving => "Giving & Support",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Dining => "utensils",
            Category::Mobility => "taxi",
            Category::Shelter => "building",
            Category::Services => "wifi",
            Category::Recreation => "gamepad",
            Category::Purchases => "cart-shopping",
            Category::Care => "stethoscope",
            Category::Studies => "book-open",
            Category::Trips => "luggage",
            Category::Grooming => "scissors",
            Category::Giving => "hands-helping",
            Category::Miscellaneous => "circle-question",
        }
    }

    /// Exact lookup by identifier (case-insensitive).
    pub fn parse(id: &str) -> Option<Category> {
        let id = id.trim().to_ascii_lowercase();
        Category::ALL.iter().copied().find(|c| c.id() == id)
    }

    /// Lookup that never fails: unrecognized identifiers resolve to
    /// [`Category::Miscellaneous`].
    pub fn parse_lossy(id: &str) -> Category {
        Category::parse(id).unwrap_or(Category::Miscellaneous)
    }
}

/// A single user-entered spending record.
///
/// `amount` and `category` are kept as the raw strings the store holds.
/// Creation through [`NewExpense`] validates both, but reads must tolerate
/// whatever is already persisted: an unparsable amount counts as zero and an
/// unknown category falls back to `Miscellaneous`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub amount: String,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

impl Expense {
    /// The amount as a decimal, or zero when it does not parse.
    pub fn amount_value(&self) -> Decimal {
        self.amount.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
    }

    /// Two-decimal display form; malformed amounts render as `0.00`.
    pub fn amount_display(&self) -> String {
        format!("{:.2}", self.amount_value())
    }

    pub fn category_kind(&self) -> Category {
        Category::parse_lossy(&self.category)
    }
}

/// A creation draft, validated before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub owner_id: String,
    pub name: String,
    pub amount: String,
    pub category: String,
    pub date: NaiveDate,
    pub description: String,
}

impl NewExpense {
    /// Check the creation invariants: non-empty name, positive decimal
    /// amount, known category, and no future date relative to `today`.
    pub fn validate(&self, today: NaiveDate) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyName);
        }
        let amount = self
            .amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| Error::InvalidAmount(self.amount.clone()))?;
        if amount <= Decimal::ZERO {
            return Err(Error::NonPositiveAmount(amount));
        }
        if Category::parse(&self.category).is_none() {
            return Err(Error::UnknownCategory(self.category.clone()));
        }
        if self.date > today {
            return Err(Error::FutureDate(self.date));
        }
        Ok(())
    }
}
