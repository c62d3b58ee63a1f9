// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::{App, report_api_error};
use crate::currency::BASE_CURRENCY;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Serialize)]
struct BudgetRow {
    category: String,
    limit: String,
    spent: String,
    percent_used: String,
}

fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let target = app.display_currency(sub);

    let budgets = app.api.list_budgets().map_err(report_api_error)?;
    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| {
            // Limits and backend-aggregated spend are stored in the base
            // currency; convert both for display.
            let limit = app.registry.convert(b.limit, BASE_CURRENCY, &target);
            let spent = app.registry.convert(b.spent, BASE_CURRENCY, &target);
            BudgetRow {
                category: b.category.clone(),
                limit: app.registry.format(limit, &target, false),
                spent: app.registry.format(spent, &target, false),
                percent_used: format!("{:.0}%", b.percent_used()),
            }
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .into_iter()
            .map(|r| vec![r.category, r.limit, r.spent, r.percent_used])
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Limit", "Spent", "Used"], data)
        );
    }
    Ok(())
}
