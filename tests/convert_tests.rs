// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneylens::currency::{RateTable, convert};

fn rates() -> RateTable {
    RateTable::from([("EUR", 1.0), ("USD", 1.08), ("BRL", 6.15)])
}

#[test]
fn identity_same_currency() {
    let r = rates();
    assert_eq!(convert(123.45, "USD", "USD", &r), 123.45);
    assert_eq!(convert(0.0, "BRL", "BRL", &r), 0.0);
}

#[test]
fn missing_rate_fails_open() {
    let r = rates();
    // Unknown on either side degrades to the identity conversion.
    assert_eq!(convert(42.0, "JPY", "USD", &r), 42.0);
    assert_eq!(convert(42.0, "USD", "JPY", &r), 42.0);
}

#[test]
fn base_to_quote_multiplies() {
    let r = rates();
    let res = convert(10.0, "EUR", "USD", &r);
    assert!((res - 10.8).abs() < 1e-9);
    // Pivoting from base equals the direct base conversion.
    assert_eq!(res, 10.0 * 1.08);
}

#[test]
fn quote_to_base_divides() {
    let r = rates();
    let res = convert(10.8, "USD", "EUR", &r);
    assert!((res - 10.0).abs() < 1e-9);
}

#[test]
fn cross_rate_pivots_through_base() {
    let r = rates();
    let res = convert(10.0, "USD", "BRL", &r);
    assert!((res - 10.0 / 1.08 * 6.15).abs() < 1e-9);
    assert_eq!(format!("{:.2}", res), "56.94");
}

#[test]
fn round_trip_within_tolerance() {
    let r = rates();
    for (from, to) in [("USD", "BRL"), ("EUR", "BRL"), ("BRL", "USD"), ("USD", "EUR")] {
        let there = convert(250.0, from, to, &r);
        let back = convert(there, to, from, &r);
        assert!((back - 250.0).abs() < 1e-9, "{from}->{to} round trip drifted");
    }
}
