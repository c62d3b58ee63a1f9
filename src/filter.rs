// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;

use crate::models::{Expense, GlobalFilters};

/// Apply the active predicates to one record, rejecting on the first failure.
///
/// Predicate order: category set, kind, free-text search, then dates. A date
/// range (either bound) takes strict priority over month/year; month/year are
/// only consulted when no range bound is set.
pub fn matches_filters(expense: &Expense, filters: &GlobalFilters) -> bool {
    if !filters.categories.is_empty() && !filters.categories.contains(&expense.category) {
        return false;
    }

    if let Some(kind) = filters.kind {
        if expense.kind != kind {
            return false;
        }
    }

    if let Some(search) = filters.search.as_deref() {
        let needle = search.trim().to_lowercase();
        if !needle.is_empty() {
            let haystack = format!(
                "{} {} {}",
                expense.description, expense.merchant, expense.category
            )
            .to_lowercase();
            if !haystack.contains(&needle) {
                return false;
            }
        }
    }

    if filters.start_date.is_some() || filters.end_date.is_some() {
        if let Some(start) = filters.start_date {
            if expense.date < start {
                return false;
            }
        }
        // Dates are calendar days, so <= end already covers the whole day.
        if let Some(end) = filters.end_date {
            if expense.date > end {
                return false;
            }
        }
    } else {
        if let Some(month) = filters.month {
            if expense.date.month() != month {
                return false;
            }
        }
        if let Some(year) = filters.year {
            if expense.date.year() != year {
                return false;
            }
        }
    }

    true
}

/// Stable filter over the expense collection: retained records keep their
/// original relative order, and an empty filter set returns the input as-is.
pub fn filter_expenses(expenses: &[Expense], filters: &GlobalFilters) -> Vec<Expense> {
    if filters.is_empty() {
        return expenses.to_vec();
    }
    expenses
        .iter()
        .filter(|e| matches_filters(e, filters))
        .cloned()
        .collect()
}
