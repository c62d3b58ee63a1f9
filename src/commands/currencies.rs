// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::App;
use crate::currency::{BASE_CURRENCY, convert};
use crate::utils::{maybe_print_json, parse_amount, pretty_table};

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(app, sub)?,
        Some(("rates", sub)) => rates(app, sub)?,
        Some(("convert", sub)) => convert_amount(app, sub)?,
        Some(("set-display", sub)) => set_display(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut currencies: Vec<_> = app.registry.currencies.values().cloned().collect();
    currencies.sort_by(|a, b| a.code.cmp(&b.code));
    if !maybe_print_json(json_flag, jsonl_flag, &currencies)? {
        let data = currencies
            .into_iter()
            .map(|c| vec![c.code, c.name, c.symbol, c.flag])
            .collect();
        println!(
            "{}",
            pretty_table(&["Code", "Name", "Symbol", "Flag"], data)
        );
    }
    Ok(())
}

fn rates(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut items: Vec<_> = app
        .registry
        .rates
        .0
        .iter()
        .map(|(c, r)| (c.clone(), *r))
        .collect();
    items.sort_by(|a, b| a.0.cmp(&b.0));
    if !maybe_print_json(json_flag, jsonl_flag, &items)? {
        let data = items
            .into_iter()
            .map(|(c, r)| vec![c, format!("{:.4}", r)])
            .collect();
        println!(
            "{}",
            pretty_table(&["Currency", &format!("Per 1 {BASE_CURRENCY}")], data)
        );
    }
    Ok(())
}

fn convert_amount(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let from = sub.get_one::<String>("from").unwrap().to_uppercase();
    let to = sub.get_one::<String>("to").unwrap().to_uppercase();
    let res = convert(amount, &from, &to, &app.registry.rates);
    println!("{} {} -> {:.4} {}", amount, from, res, to);
    Ok(())
}

fn set_display(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let code = sub.get_one::<String>("currency").unwrap().to_uppercase();
    if app.registry.currency(&code).is_none() {
        eprintln!("warning: '{}' is not in the currency registry", code);
    }
    let mut prefs = app.prefs.clone();
    prefs.display_currency = code.clone();
    prefs.save()?;
    println!("Display currency set to {}", code);
    Ok(())
}
