// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::models::{Amount, Currency, Expense};

/// All exchange rates are quoted against this currency: 1 EUR = rate units of
/// the quote currency.
pub const BASE_CURRENCY: &str = "EUR";

/// Redaction string used when amounts are hidden from view.
pub const HIDDEN_AMOUNT: &str = "••••";

/// Session snapshot of exchange rates, currency code -> units per 1 EUR.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateTable(pub HashMap<String, f64>);

impl RateTable {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self(rates)
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }
}

impl<const N: usize> From<[(&str, f64); N]> for RateTable {
    fn from(pairs: [(&str, f64); N]) -> Self {
        Self(pairs.iter().map(|(c, r)| (c.to_string(), *r)).collect())
    }
}

/// Convert `amount` between two currencies by pivoting through the base.
///
/// Deliberately exception-free: an unknown currency or missing rate degrades
/// to the identity conversion so callers always get a displayable number.
pub fn convert(amount: f64, from: &str, to: &str, rates: &RateTable) -> f64 {
    if from == to {
        return amount;
    }
    let (Some(from_rate), Some(to_rate)) = (rates.rate(from), rates.rate(to)) else {
        return amount;
    };
    if from == BASE_CURRENCY {
        return amount * to_rate;
    }
    if to == BASE_CURRENCY {
        return amount / from_rate;
    }
    amount / from_rate * to_rate
}

/// Best-available amount for an expense in the target currency.
///
/// A write-time snapshot entry for the target wins over a live conversion;
/// otherwise the recorded figure is converted from its original currency
/// (defaulting to the base when unset).
pub fn resolve_amount(expense: &Expense, target: &str, rates: &RateTable) -> f64 {
    match expense.recorded_amount() {
        Amount::Exact(map) => match map.get(target) {
            Some(v) => *v,
            None => convert(expense.amount, expense.original_currency(), target, rates),
        },
        Amount::Single { currency, value } => convert(value, currency, target, rates),
    }
}

/// Currencies whose symbol is separated from the number by a space.
/// Hardcoded per code for the observed set; a locale library would be needed
/// if this list grows.
fn symbol_spaced(code: &str) -> bool {
    matches!(code, "BRL")
}

/// Render an amount for display, rounded to two decimals.
pub fn format_amount(amount: f64, currency: &Currency, hide: bool) -> String {
    if hide {
        return HIDDEN_AMOUNT.to_string();
    }
    if symbol_spaced(&currency.code) {
        format!("{} {:.2}", currency.symbol, amount)
    } else {
        format!("{}{:.2}", currency.symbol, amount)
    }
}

fn currency(code: &str, name: &str, symbol: &str, flag: &str) -> (String, Currency) {
    (
        code.to_string(),
        Currency {
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            flag: flag.to_string(),
        },
    )
}

/// Built-in currency table used when the registry fetch fails.
pub static FALLBACK_CURRENCIES: Lazy<HashMap<String, Currency>> = Lazy::new(|| {
    HashMap::from([
        currency("USD", "US Dollar", "$", "🇺🇸"),
        currency("EUR", "Euro", "€", "🇪🇺"),
        currency("BRL", "Brazilian Real", "R$", "🇧🇷"),
    ])
});

/// Built-in rates used when the rate fetch fails. Static and approximate;
/// only a last resort so the UI never blocks on currency data.
pub static FALLBACK_RATES: Lazy<RateTable> =
    Lazy::new(|| RateTable::from([("EUR", 1.0), ("USD", 1.08), ("BRL", 6.15)]));

/// Currency metadata plus exchange rates, loaded once per session.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    pub currencies: HashMap<String, Currency>,
    pub rates: RateTable,
}

impl CurrencyRegistry {
    /// Fetch both reference tables, recovering each independently with the
    /// built-in fallback. Failures are logged and never surfaced.
    pub fn load(client: &ApiClient) -> Self {
        let currencies = match client.fetch_currencies() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("warning: currency registry fetch failed ({e}); using built-in table");
                FALLBACK_CURRENCIES.clone()
            }
        };
        let rates = match client.fetch_exchange_rates() {
            Ok(r) => r,
            Err(e) => {
                eprintln!("warning: exchange rate fetch failed ({e}); using built-in rates");
                FALLBACK_RATES.clone()
            }
        };
        Self { currencies, rates }
    }

    pub fn from_fallback() -> Self {
        Self {
            currencies: FALLBACK_CURRENCIES.clone(),
            rates: FALLBACK_RATES.clone(),
        }
    }

    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies.get(code)
    }

    pub fn convert(&self, amount: f64, from: &str, to: &str) -> f64 {
        convert(amount, from, to, &self.rates)
    }

    pub fn resolve(&self, expense: &Expense, target: &str) -> f64 {
        resolve_amount(expense, target, &self.rates)
    }

    /// Format an amount in the given currency. Unknown codes fall back to
    /// `CODE 1.23` so missing metadata never hides the number.
    pub fn format(&self, amount: f64, code: &str, hide: bool) -> String {
        match self.currency(code) {
            Some(c) => format_amount(amount, c, hide),
            None if hide => HIDDEN_AMOUNT.to_string(),
            None => format!("{} {:.2}", code, amount),
        }
    }
}
