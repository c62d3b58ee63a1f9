// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::App;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let language = sub.get_one::<String>("language").unwrap().to_lowercase();
            let mut prefs = app.prefs.clone();
            prefs.language = language.clone();
            prefs.save()?;
            println!("Language set to {}", language);
        }
        Some(("show", _)) => {
            println!("{}", app.prefs.language);
        }
        _ => {}
    }
    Ok(())
}
