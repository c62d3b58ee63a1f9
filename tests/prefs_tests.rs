// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneylens::prefs::Prefs;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let prefs = Prefs::load_from(&path).unwrap();
    assert_eq!(prefs.display_currency, "EUR");
    assert_eq!(prefs.language, "en");
}

#[test]
fn save_and_reload_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.json");
    let prefs = Prefs {
        display_currency: "BRL".into(),
        language: "pt".into(),
        api_base: "https://api.example.test".into(),
    };
    prefs.save_to(&path).unwrap();
    let loaded = Prefs::load_from(&path).unwrap();
    assert_eq!(loaded.display_currency, "BRL");
    assert_eq!(loaded.language, "pt");
    assert_eq!(loaded.api_base, "https://api.example.test");
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "not json").unwrap();
    assert!(Prefs::load_from(&path).is_err());
}
