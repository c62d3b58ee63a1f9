// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneylens::currency::{CurrencyRegistry, HIDDEN_AMOUNT, format_amount};
use moneylens::models::Currency;

fn currency(code: &str, symbol: &str) -> Currency {
    Currency {
        code: code.into(),
        name: code.into(),
        symbol: symbol.into(),
        flag: String::new(),
    }
}

#[test]
fn hidden_output_is_constant() {
    let eur = currency("EUR", "€");
    let brl = currency("BRL", "R$");
    assert_eq!(format_amount(0.0, &eur, true), HIDDEN_AMOUNT);
    assert_eq!(format_amount(123456.789, &brl, true), HIDDEN_AMOUNT);
    assert_eq!(format_amount(-1.0, &eur, true), HIDDEN_AMOUNT);
}

#[test]
fn symbol_prefixes_most_currencies() {
    assert_eq!(format_amount(12.345, &currency("EUR", "€"), false), "€12.35");
    assert_eq!(format_amount(0.5, &currency("USD", "$"), false), "$0.50");
}

#[test]
fn brl_symbol_gets_a_space() {
    assert_eq!(
        format_amount(12.3, &currency("BRL", "R$"), false),
        "R$ 12.30"
    );
}

#[test]
fn registry_falls_back_to_bare_code_for_unknown_metadata() {
    let registry = CurrencyRegistry::from_fallback();
    assert_eq!(registry.format(5.0, "XYZ", false), "XYZ 5.00");
    assert_eq!(registry.format(5.0, "XYZ", true), HIDDEN_AMOUNT);
}

#[test]
fn registry_formats_known_currencies() {
    let registry = CurrencyRegistry::from_fallback();
    assert_eq!(registry.format(10.0, "EUR", false), "€10.00");
    assert_eq!(registry.format(10.0, "BRL", false), "R$ 10.00");
}
