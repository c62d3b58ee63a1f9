// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneylens::api::{parse_validation_detail, user_message};

#[test]
fn known_codes_map_to_specific_messages() {
    let (title, _) = user_message("expense_not_found");
    assert_eq!(title, "Expense not found");
    let (title, message) = user_message("validation_error");
    assert_eq!(title, "Invalid data");
    assert!(!message.is_empty());
}

#[test]
fn unknown_codes_fall_back_to_generic_pair() {
    let (title, message) = user_message("totally_new_code");
    assert_eq!(title, "Unexpected error");
    assert_eq!(message, "Something went wrong. Please try again.");
}

#[test]
fn validation_detail_splits_field_and_message() {
    let parsed = parse_validation_detail("amount: must be non-negative");
    assert_eq!(
        parsed,
        Some(("amount".to_string(), "must be non-negative".to_string()))
    );
}

#[test]
fn non_field_detail_is_not_parsed() {
    assert_eq!(parse_validation_detail("internal server error"), None);
}
