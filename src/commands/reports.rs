// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::{App, filters_from_args, report_api_error};
use crate::aggregate::{Category, group_by_month, palette_color, sum_by_category, sum_by_kind};
use crate::filter::filter_expenses;
use crate::models::{Expense, ExpenseKind};
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(app, sub)?,
        Some(("by-category", sub)) => by_category(app, sub)?,
        Some(("monthly", sub)) => monthly(app, sub)?,
        Some(("category-spending", sub)) => category_spending(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn visible_expenses(app: &App, sub: &clap::ArgMatches) -> Result<Vec<Expense>> {
    let filters = filters_from_args(sub)?;
    let expenses = app.api.list_expenses().map_err(report_api_error)?;
    Ok(filter_expenses(&expenses, &filters))
}

fn summary(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let target = app.display_currency(sub);
    let expenses = visible_expenses(app, sub)?;

    let income = sum_by_kind(&expenses, ExpenseKind::Income, &target, &app.registry.rates);
    let spent = sum_by_kind(&expenses, ExpenseKind::Expense, &target, &app.registry.rates);
    let net = income - spent;

    let rows = vec![
        ("income", income),
        ("expenses", spent),
        ("net", net),
    ];
    if !maybe_print_json(
        json_flag,
        jsonl_flag,
        &serde_json::json!({ "currency": target, "income": income, "expenses": spent, "net": net }),
    )? {
        let data = rows
            .into_iter()
            .map(|(k, v)| vec![k.to_string(), app.registry.format(v, &target, false)])
            .collect();
        println!("{}", pretty_table(&["", &format!("Total ({target})")], data));
    }
    Ok(())
}

fn by_category(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let target = app.display_currency(sub);
    let expenses = visible_expenses(app, sub)?;
    let categories: Vec<Category> = app
        .api
        .list_categories()
        .map_err(report_api_error)?
        .into_iter()
        .enumerate()
        .map(|(i, mut c)| {
            if c.color.is_empty() {
                c.color = palette_color(i).to_string();
            }
            c
        })
        .collect();

    let slices = sum_by_category(&expenses, &categories, &target, &app.registry.rates);
    if !maybe_print_json(json_flag, jsonl_flag, &slices)? {
        let data = slices
            .into_iter()
            .map(|s| {
                vec![
                    s.name,
                    app.registry.format(s.value, &target, false),
                    s.color,
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Color"], data));
    }
    Ok(())
}

fn monthly(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let target = app.display_currency(sub);
    let expenses = visible_expenses(app, sub)?;

    let flows = group_by_month(&expenses, &target, &app.registry.rates);
    if !maybe_print_json(json_flag, jsonl_flag, &flows)? {
        let data = flows
            .into_iter()
            .map(|f| {
                vec![
                    f.month,
                    format!("{:.2}", f.income),
                    format!("{:.2}", f.expenses),
                    format!("{:.2}", f.net),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Net"], data)
        );
    }
    Ok(())
}

fn category_spending(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let target = app.display_currency(sub);

    let spending = app
        .api
        .category_spending(&target)
        .map_err(report_api_error)?;
    let mut items: Vec<_> = spending.into_iter().collect();
    items.sort_by(|a, b| b.1.total_cmp(&a.1));

    if !maybe_print_json(json_flag, jsonl_flag, &items)? {
        let data = items
            .into_iter()
            .map(|(cat, v)| vec![cat, app.registry.format(v, &target, false)])
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", &format!("Spent ({target})")], data)
        );
    }
    Ok(())
}
