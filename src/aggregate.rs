// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::currency::{RateTable, resolve_amount};
use crate::models::{Expense, ExpenseKind};

/// Category reference data with its chart color. The backend may omit the
/// color; callers fill it from the palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// One pie-chart slice: total spend for a category in the display currency.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

/// One bar-chart bucket: income vs expenses for a calendar month.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyFlow {
    /// Bucket key, `YYYY-MM`.
    pub month: String,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
}

/// Default chart palette, cycled for categories without an assigned color.
pub const CATEGORY_PALETTE: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

pub fn palette_color(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

/// Sum all records of one kind, resolved into the target currency.
pub fn sum_by_kind(
    expenses: &[Expense],
    kind: ExpenseKind,
    target: &str,
    rates: &RateTable,
) -> f64 {
    expenses
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| resolve_amount(e, target, rates))
        .sum()
}

/// Per-category totals over `expense`-kind records only. Categories with a
/// zero total are dropped so they do not clutter the pie chart.
pub fn sum_by_category(
    expenses: &[Expense],
    categories: &[Category],
    target: &str,
    rates: &RateTable,
) -> Vec<CategorySlice> {
    categories
        .iter()
        .filter_map(|cat| {
            let value: f64 = expenses
                .iter()
                .filter(|e| e.kind == ExpenseKind::Expense && e.category == cat.name)
                .map(|e| resolve_amount(e, target, rates))
                .sum();
            if value == 0.0 {
                return None;
            }
            Some(CategorySlice {
                name: cat.name.clone(),
                value,
                color: cat.color.clone(),
            })
        })
        .collect()
}

/// Bucket records by calendar month, summing income and expenses separately.
/// Buckets come back in chronological order.
pub fn group_by_month(expenses: &[Expense], target: &str, rates: &RateTable) -> Vec<MonthlyFlow> {
    let mut buckets: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for e in expenses {
        let key = e.date.format("%Y-%m").to_string();
        let amount = resolve_amount(e, target, rates);
        let entry = buckets.entry(key).or_insert((0.0, 0.0));
        match e.kind {
            ExpenseKind::Income => entry.0 += amount,
            ExpenseKind::Expense => entry.1 += amount,
        }
    }
    buckets
        .into_iter()
        .map(|(month, (income, expenses))| MonthlyFlow {
            month,
            income,
            expenses,
            net: income - expenses,
        })
        .collect()
}
