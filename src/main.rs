// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use moneylens::{api, cli, commands, currency, prefs};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let prefs = prefs::Prefs::load()?;
    let api = api::ApiClient::new(&prefs.api_base)?;
    let registry = currency::CurrencyRegistry::load(&api);
    let app = commands::App {
        api,
        registry,
        prefs,
    };

    match matches.subcommand() {
        Some(("expense", sub)) => commands::expenses::handle(&app, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&app, sub)?,
        Some(("goal", sub)) => commands::goals::handle(&app, sub)?,
        Some(("report", sub)) => commands::reports::handle(&app, sub)?,
        Some(("currency", sub)) => commands::currencies::handle(&app, sub)?,
        Some(("lang", sub)) => commands::lang::handle(&app, sub)?,
        Some(("connect", sub)) => commands::connect::handle(&app, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&app, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
