// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use super::{App, report_api_error};
use crate::api::NewGoal;
use crate::currency::BASE_CURRENCY;
use crate::models::{GoalKind, Priority, Recurrence};
use crate::utils::{maybe_print_json, parse_amount, parse_date, pretty_table};

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(app, sub)?,
        Some(("list", sub)) => list(app, sub)?,
        Some(("rm", sub)) => rm(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_goal_kind(s: &str) -> GoalKind {
    match s {
        "spending" => GoalKind::Spending,
        "debt" => GoalKind::Debt,
        _ => GoalKind::Saving,
    }
}

fn parse_recurrence(s: &str) -> Recurrence {
    match s {
        "weekly" => Recurrence::Weekly,
        "monthly" => Recurrence::Monthly,
        "yearly" => Recurrence::Yearly,
        _ => Recurrence::None,
    }
}

fn parse_priority(s: &str) -> Priority {
    match s {
        "low" => Priority::Low,
        "high" => Priority::High,
        _ => Priority::Medium,
    }
}

fn add(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().to_string();
    let target_amount = parse_amount(sub.get_one::<String>("target").unwrap())?;
    let current_amount = parse_amount(sub.get_one::<String>("current").unwrap())?;
    let target_date = sub
        .get_one::<String>("date")
        .map(|s| parse_date(s))
        .transpose()?;

    let body = NewGoal {
        name: name.clone(),
        kind: parse_goal_kind(sub.get_one::<String>("type").unwrap()),
        recurrence: parse_recurrence(sub.get_one::<String>("recurrence").unwrap()),
        target_amount,
        current_amount,
        target_date,
        priority: parse_priority(sub.get_one::<String>("priority").unwrap()),
        color: sub.get_one::<String>("color").unwrap().to_string(),
        icon: sub.get_one::<String>("icon").unwrap().to_string(),
    };
    let created = app.api.create_goal(&body).map_err(report_api_error)?;
    println!("Created goal '{}' (id {})", name, created.id);
    Ok(())
}

#[derive(Serialize)]
struct GoalRow {
    id: i64,
    name: String,
    r#type: String,
    target: String,
    current: String,
    progress: String,
    status: String,
    target_date: String,
}

fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let target = app.display_currency(sub);

    let goals = app.api.list_goals().map_err(report_api_error)?;
    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|g| GoalRow {
            id: g.id,
            name: g.name.clone(),
            r#type: format!("{:?}", g.kind).to_lowercase(),
            target: app.registry.format(
                app.registry.convert(g.target_amount, BASE_CURRENCY, &target),
                &target,
                false,
            ),
            current: app.registry.format(
                app.registry.convert(g.current_amount, BASE_CURRENCY, &target),
                &target,
                false,
            ),
            progress: format!("{:.0}%", g.progress_percent()),
            status: format!("{:?}", g.status).to_lowercase(),
            target_date: g.target_date.map(|d| d.to_string()).unwrap_or_default(),
        })
        .collect();

    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        let data = rows
            .into_iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.name,
                    r.r#type,
                    r.target,
                    r.current,
                    r.progress,
                    r.status,
                    r.target_date,
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Name", "Type", "Target", "Current", "Progress", "Status", "By"],
                data,
            )
        );
    }
    Ok(())
}

fn rm(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    app.api.delete_goal(id).map_err(report_api_error)?;
    println!("Deleted goal {}", id);
    Ok(())
}
