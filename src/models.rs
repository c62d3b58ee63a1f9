// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::BASE_CURRENCY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseKind {
    Expense,
    Income,
}

impl ExpenseKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "expense" => Some(Self::Expense),
            "income" => Some(Self::Income),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

/// A single expense or income record as served by the backend.
///
/// `amount` is a non-negative magnitude; the sign is carried by `kind`.
/// `amounts`, when present, is the backend's write-time conversion snapshot
/// (currency code -> amount) and always includes the original currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub merchant: String,
    #[serde(rename = "type")]
    pub kind: ExpenseKind,
    pub original_currency: Option<String>,
    pub amounts: Option<HashMap<String, f64>>,
    pub exchange_rates: Option<HashMap<String, f64>>,
    pub exchange_date: Option<NaiveDate>,
}

/// How an expense's amount was recorded: either a snapshot map covering
/// several currencies, or a single figure in one currency.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount<'a> {
    Exact(&'a HashMap<String, f64>),
    Single { currency: &'a str, value: f64 },
}

impl Expense {
    pub fn recorded_amount(&self) -> Amount<'_> {
        match &self.amounts {
            Some(map) if !map.is_empty() => Amount::Exact(map),
            _ => Amount::Single {
                currency: self.original_currency.as_deref().unwrap_or(BASE_CURRENCY),
                value: self.amount,
            },
        }
    }

    pub fn original_currency(&self) -> &str {
        self.original_currency.as_deref().unwrap_or(BASE_CURRENCY)
    }
}

/// Currency reference data. Immutable for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub flag: String,
}

/// Per-category budget. `spent` is aggregated by the backend and only
/// displayed here; `limit` is stored in the base currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub category: String,
    pub limit: f64,
    pub spent: f64,
}

impl Budget {
    pub fn percent_used(&self) -> f64 {
        if self.limit <= 0.0 {
            return 0.0;
        }
        (self.spent / self.limit * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalKind {
    Spending,
    Saving,
    Debt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    None,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Paused,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GoalKind,
    pub recurrence: Recurrence,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: Option<NaiveDate>,
    pub priority: Priority,
    pub status: GoalStatus,
    pub color: String,
    pub icon: String,
}

impl Goal {
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_amount / self.target_amount * 100.0).clamp(0.0, 100.0)
    }
}

/// Active filter set applied to the expense collection. Every predicate is
/// optional; the default value filters nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalFilters {
    pub categories: Vec<String>,
    pub kind: Option<ExpenseKind>,
    pub search: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

impl GlobalFilters {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.kind.is_none()
            && self.search.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.month.is_none()
            && self.year.is_none()
    }
}

/// Institution descriptor delivered by the bank aggregation widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Institution {
    pub id: String,
    pub name: String,
}
