// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::{App, filters_from_args, report_api_error};
use crate::api::NewExpense;
use crate::filter::filter_expenses;
use crate::models::ExpenseKind;
use crate::utils::{maybe_print_json, parse_amount, parse_date, pretty_table};

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        Some(("edit", sub)) => edit(app, sub)?,
        Some(("rm", sub)) => rm(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn expense_body(sub: &clap::ArgMatches) -> Result<NewExpense> {
    Ok(NewExpense {
        date: parse_date(sub.get_one::<String>("date").unwrap())?,
        amount: parse_amount(sub.get_one::<String>("amount").unwrap())?,
        category: sub.get_one::<String>("category").unwrap().to_string(),
        description: sub.get_one::<String>("description").unwrap().to_string(),
        merchant: sub.get_one::<String>("merchant").unwrap().to_string(),
        kind: ExpenseKind::parse(sub.get_one::<String>("type").unwrap())
            .unwrap_or(ExpenseKind::Expense),
        original_currency: sub.get_one::<String>("currency").map(|s| s.to_uppercase()),
    })
}

fn add(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let body = expense_body(sub)?;
    let created = app.api.create_expense(&body).map_err(report_api_error)?;
    println!(
        "Recorded {} {} on {} ({})",
        created.amount,
        created.original_currency(),
        created.date,
        created.category
    );
    Ok(())
}

fn edit(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let body = expense_body(sub)?;
    let updated = app
        .api
        .update_expense(id, &body)
        .map_err(report_api_error)?;
    println!("Updated expense {} ({})", updated.id, updated.category);
    Ok(())
}

#[derive(Serialize)]
struct ExpenseRow {
    id: i64,
    date: String,
    category: String,
    description: String,
    merchant: String,
    r#type: &'static str,
    amount: String,
}

fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let hide = sub.get_flag("hide");
    let target = app.display_currency(sub);
    let filters = filters_from_args(sub)?;

    let expenses = app.api.list_expenses().map_err(report_api_error)?;
    let visible = filter_expenses(&expenses, &filters);

    let rows: Vec<ExpenseRow> = visible
        .iter()
        .map(|e| ExpenseRow {
            id: e.id,
            date: e.date.to_string(),
            category: e.category.clone(),
            description: e.description.clone(),
            merchant: e.merchant.clone(),
            r#type: e.kind.as_str(),
            amount: app.registry.format(app.registry.resolve(e, &target), &target, hide),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .into_iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date,
                    r.category,
                    r.description,
                    r.merchant,
                    r.r#type.to_string(),
                    r.amount,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Category", "Description", "Merchant", "Type", "Amount"],
                data,
            )
        );
    }
    Ok(())
}

fn rm(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    app.api.delete_expense(id).map_err(report_api_error)?;
    println!("Deleted expense {}", id);
    Ok(())
}
