// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::NaiveDate;
use moneylens::currency::{RateTable, resolve_amount};
use moneylens::models::{Expense, ExpenseKind};

fn rates() -> RateTable {
    RateTable::from([("EUR", 1.0), ("USD", 1.08), ("BRL", 6.15)])
}

fn expense(amount: f64, original_currency: Option<&str>) -> Expense {
    Expense {
        id: 1,
        date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        amount,
        category: "Groceries".into(),
        description: String::new(),
        merchant: String::new(),
        kind: ExpenseKind::Expense,
        original_currency: original_currency.map(str::to_string),
        amounts: None,
        exchange_rates: None,
        exchange_date: None,
    }
}

#[test]
fn snapshot_wins_over_live_conversion() {
    let mut e = expense(100.0, Some("USD"));
    // Deliberately disagreeing snapshot: live conversion would give ~92.59.
    e.amounts = Some(HashMap::from([
        ("USD".to_string(), 100.0),
        ("EUR".to_string(), 90.0),
    ]));
    assert_eq!(resolve_amount(&e, "EUR", &rates()), 90.0);
}

#[test]
fn snapshot_missing_target_falls_back_to_conversion() {
    let mut e = expense(100.0, Some("USD"));
    e.amounts = Some(HashMap::from([("USD".to_string(), 100.0)]));
    let res = resolve_amount(&e, "BRL", &rates());
    assert!((res - 100.0 / 1.08 * 6.15).abs() < 1e-9);
}

#[test]
fn no_snapshot_converts_from_original_currency() {
    let e = expense(10.0, Some("EUR"));
    assert!((resolve_amount(&e, "USD", &rates()) - 10.8).abs() < 1e-9);
}

#[test]
fn missing_original_currency_defaults_to_base() {
    let e = expense(10.0, None);
    // Treated as EUR.
    assert!((resolve_amount(&e, "USD", &rates()) - 10.8).abs() < 1e-9);
    assert_eq!(resolve_amount(&e, "EUR", &rates()), 10.0);
}

#[test]
fn unknown_target_currency_degrades_to_recorded_amount() {
    let e = expense(10.0, Some("USD"));
    assert_eq!(resolve_amount(&e, "JPY", &rates()), 10.0);
}
