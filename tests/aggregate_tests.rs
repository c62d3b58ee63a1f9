// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneylens::aggregate::{Category, group_by_month, sum_by_category, sum_by_kind};
use moneylens::currency::RateTable;
use moneylens::models::{Expense, ExpenseKind};

fn rates() -> RateTable {
    RateTable::from([("EUR", 1.0), ("USD", 1.08), ("BRL", 6.15)])
}

fn expense(amount: f64, kind: ExpenseKind, category: &str, day: &str) -> Expense {
    Expense {
        id: 0,
        date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
        amount,
        category: category.into(),
        description: String::new(),
        merchant: String::new(),
        kind,
        original_currency: Some("EUR".into()),
        amounts: None,
        exchange_rates: None,
        exchange_date: None,
    }
}

fn categories() -> Vec<Category> {
    vec![
        Category {
            name: "Groceries".into(),
            color: "#4e79a7".into(),
        },
        Category {
            name: "Transport".into(),
            color: "#f28e2b".into(),
        },
        Category {
            name: "Income".into(),
            color: "#59a14f".into(),
        },
    ]
}

#[test]
fn sum_by_kind_converts_and_sums() {
    let expenses = vec![
        expense(50.0, ExpenseKind::Expense, "Groceries", "2025-01-05"),
        expense(30.0, ExpenseKind::Expense, "Groceries", "2025-01-09"),
        expense(1000.0, ExpenseKind::Income, "Income", "2025-01-01"),
    ];
    let r = rates();
    assert_eq!(sum_by_kind(&expenses, ExpenseKind::Expense, "EUR", &r), 80.0);
    let usd = sum_by_kind(&expenses, ExpenseKind::Income, "USD", &r);
    assert!((usd - 1080.0).abs() < 1e-9);
}

#[test]
fn sum_by_category_excludes_income_and_zero_totals() {
    let expenses = vec![
        expense(50.0, ExpenseKind::Expense, "Groceries", "2025-01-05"),
        expense(30.0, ExpenseKind::Expense, "Groceries", "2025-01-09"),
        expense(1000.0, ExpenseKind::Income, "Income", "2025-01-01"),
    ];
    let slices = sum_by_category(&expenses, &categories(), "EUR", &rates());
    // Income rows never count as spend, and Transport has no records, so only
    // Groceries survives.
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].name, "Groceries");
    assert_eq!(slices[0].value, 80.0);
    assert_eq!(slices[0].color, "#4e79a7");
}

#[test]
fn group_by_month_buckets_chronologically() {
    let expenses = vec![
        expense(200.0, ExpenseKind::Expense, "Rent", "2025-02-01"),
        expense(3000.0, ExpenseKind::Income, "Income", "2025-01-01"),
        expense(100.0, ExpenseKind::Expense, "Groceries", "2025-01-05"),
        expense(2500.0, ExpenseKind::Income, "Income", "2025-02-01"),
    ];
    let flows = group_by_month(&expenses, "EUR", &rates());
    assert_eq!(flows.len(), 2);
    assert_eq!(flows[0].month, "2025-01");
    assert_eq!(flows[0].income, 3000.0);
    assert_eq!(flows[0].expenses, 100.0);
    assert_eq!(flows[0].net, 2900.0);
    assert_eq!(flows[1].month, "2025-02");
    assert_eq!(flows[1].net, 2300.0);
}

#[test]
fn group_by_month_respects_display_currency() {
    let expenses = vec![expense(100.0, ExpenseKind::Expense, "Groceries", "2025-01-05")];
    let flows = group_by_month(&expenses, "USD", &rates());
    assert!((flows[0].expenses - 108.0).abs() < 1e-9);
}
