// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod budgets;
pub mod connect;
pub mod currencies;
pub mod expenses;
pub mod exporter;
pub mod goals;
pub mod lang;
pub mod reports;

use anyhow::{Result, anyhow};

use crate::api::{ApiClient, ApiError, parse_validation_detail, user_message};
use crate::currency::CurrencyRegistry;
use crate::models::{ExpenseKind, GlobalFilters};
use crate::prefs::Prefs;
use crate::utils::parse_date;

/// Everything a subcommand needs: the backend client, the session currency
/// snapshot, and the saved preferences.
pub struct App {
    pub api: ApiClient,
    pub registry: CurrencyRegistry,
    pub prefs: Prefs,
}

impl App {
    /// Display currency for this invocation: the --currency flag when given,
    /// else the persisted preference.
    pub fn display_currency(&self, m: &clap::ArgMatches) -> String {
        m.get_one::<String>("currency")
            .map(|s| s.to_uppercase())
            .unwrap_or_else(|| self.prefs.display_currency.clone())
    }
}

/// Map a backend failure to the user-facing title+message pair, keeping the
/// parsed validation field when the detail carries one.
pub fn report_api_error(err: ApiError) -> anyhow::Error {
    if let ApiError::Backend { code, detail } = &err {
        let (title, message) = user_message(code);
        if let Some((field, msg)) = parse_validation_detail(detail) {
            return anyhow!("{title}: {message} ({field}: {msg})");
        }
        return anyhow!("{title}: {message}");
    }
    err.into()
}

/// Build the filter set from the shared filter flags.
pub fn filters_from_args(m: &clap::ArgMatches) -> Result<GlobalFilters> {
    let mut filters = GlobalFilters {
        categories: m
            .get_many::<String>("category")
            .map(|vals| vals.cloned().collect())
            .unwrap_or_default(),
        search: m.get_one::<String>("search").cloned(),
        month: m.get_one::<u32>("month").copied(),
        year: m.get_one::<i32>("year").copied(),
        ..GlobalFilters::default()
    };
    if let Some(kind) = m.get_one::<String>("type") {
        filters.kind = ExpenseKind::parse(kind);
    }
    if let Some(from) = m.get_one::<String>("from") {
        filters.start_date = Some(parse_date(from)?);
    }
    if let Some(to) = m.get_one::<String>("to") {
        filters.end_date = Some(parse_date(to)?);
    }
    Ok(filters)
}
