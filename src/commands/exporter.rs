// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::{App, filters_from_args, report_api_error};
use crate::filter::filter_expenses;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expenses", sub)) => export_expenses(app, sub),
        _ => Ok(()),
    }
}

fn export_expenses(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let filters = filters_from_args(sub)?;

    let expenses = app.api.list_expenses().map_err(report_api_error)?;
    let visible = filter_expenses(&expenses, &filters);

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "amount",
                "currency",
                "category",
                "description",
                "merchant",
                "type",
            ])?;
            for e in &visible {
                wtr.write_record([
                    e.id.to_string(),
                    e.date.to_string(),
                    format!("{:.2}", e.amount),
                    e.original_currency().to_string(),
                    e.category.clone(),
                    e.description.clone(),
                    e.merchant.clone(),
                    e.kind.as_str().to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&visible)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} records to {}", visible.len(), out);
    Ok(())
}
