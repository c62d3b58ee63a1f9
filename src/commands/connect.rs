// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use super::{App, report_api_error};
use crate::models::Institution;

pub fn handle(app: &App, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("start", _)) => start(app)?,
        Some(("finish", sub)) => finish(app, sub)?,
        _ => {}
    }
    Ok(())
}

fn start(app: &App) -> Result<()> {
    let token = app.api.create_link_token().map_err(report_api_error)?;
    println!("Link token (valid {}s): {}", token.expires_in, token.link_token);
    println!("Open the bank widget with this token, then run 'moneylens connect finish'.");
    Ok(())
}

fn finish(app: &App, sub: &clap::ArgMatches) -> Result<()> {
    let link_id = sub.get_one::<String>("link-id").unwrap();
    let institution = Institution {
        id: sub.get_one::<String>("institution-id").unwrap().to_string(),
        name: sub
            .get_one::<String>("institution-name")
            .unwrap()
            .to_string(),
    };
    app.api
        .save_connection(link_id, &institution)
        .map_err(report_api_error)?;
    println!("Saved connection to {}", institution.name);
    Ok(())
}
