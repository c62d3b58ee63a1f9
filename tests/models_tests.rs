// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::NaiveDate;
use moneylens::models::{
    Amount, Budget, Expense, ExpenseKind, Goal, GoalKind, GoalStatus, Priority, Recurrence,
};

fn expense() -> Expense {
    Expense {
        id: 7,
        date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
        amount: 25.0,
        category: "Dining".into(),
        description: "Lunch".into(),
        merchant: "Cafe".into(),
        kind: ExpenseKind::Expense,
        original_currency: Some("USD".into()),
        amounts: None,
        exchange_rates: None,
        exchange_date: None,
    }
}

#[test]
fn recorded_amount_classifies_snapshot_records() {
    let mut e = expense();
    assert_eq!(
        e.recorded_amount(),
        Amount::Single {
            currency: "USD",
            value: 25.0
        }
    );

    let map = HashMap::from([("USD".to_string(), 25.0), ("EUR".to_string(), 23.1)]);
    e.amounts = Some(map.clone());
    assert_eq!(e.recorded_amount(), Amount::Exact(&map));

    // An empty snapshot map is treated as absent.
    e.amounts = Some(HashMap::new());
    assert!(matches!(e.recorded_amount(), Amount::Single { .. }));
}

#[test]
fn original_currency_defaults_to_base() {
    let mut e = expense();
    e.original_currency = None;
    assert_eq!(e.original_currency(), "EUR");
}

#[test]
fn expense_wire_format_uses_type_key() {
    let e = expense();
    let v = serde_json::to_value(&e).unwrap();
    assert_eq!(v["type"], "expense");
    let back: Expense = serde_json::from_value(v).unwrap();
    assert_eq!(back.kind, ExpenseKind::Expense);
}

#[test]
fn budget_percent_used_clamps() {
    let over = Budget {
        category: "Dining".into(),
        limit: 100.0,
        spent: 250.0,
    };
    assert_eq!(over.percent_used(), 100.0);

    let zero_limit = Budget {
        category: "Dining".into(),
        limit: 0.0,
        spent: 10.0,
    };
    assert_eq!(zero_limit.percent_used(), 0.0);

    let half = Budget {
        category: "Dining".into(),
        limit: 100.0,
        spent: 50.0,
    };
    assert_eq!(half.percent_used(), 50.0);
}

#[test]
fn goal_progress_clamps() {
    let mut goal = Goal {
        id: 1,
        name: "Emergency fund".into(),
        kind: GoalKind::Saving,
        recurrence: Recurrence::None,
        target_amount: 1000.0,
        current_amount: 1250.0,
        target_date: None,
        priority: Priority::High,
        status: GoalStatus::Active,
        color: "#59a14f".into(),
        icon: "piggy-bank".into(),
    };
    assert_eq!(goal.progress_percent(), 100.0);

    goal.current_amount = 250.0;
    assert_eq!(goal.progress_percent(), 25.0);

    goal.target_amount = 0.0;
    assert_eq!(goal.progress_percent(), 0.0);
}
