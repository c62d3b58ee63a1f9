// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod api;
pub mod cli;
pub mod commands;
pub mod currency;
pub mod filter;
pub mod models;
pub mod prefs;
pub mod utils;
