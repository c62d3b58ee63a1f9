// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print output as pretty JSON")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print output as JSON lines")
            .action(ArgAction::SetTrue),
    )
}

fn filter_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("category")
            .long("category")
            .help("Keep only these categories (repeatable)")
            .action(ArgAction::Append),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .help("Keep only one record kind")
            .value_parser(["expense", "income"]),
    )
    .arg(
        Arg::new("search")
            .long("search")
            .help("Case-insensitive text match on description, merchant, category"),
    )
    .arg(Arg::new("from").long("from").help("Start date, YYYY-MM-DD"))
    .arg(
        Arg::new("to")
            .long("to")
            .help("End date, YYYY-MM-DD (inclusive)"),
    )
    .arg(
        Arg::new("month")
            .long("month")
            .help("Calendar month 1-12 (ignored when a date range is set)")
            .value_parser(value_parser!(u32)),
    )
    .arg(
        Arg::new("year")
            .long("year")
            .help("Calendar year (ignored when a date range is set)")
            .value_parser(value_parser!(i32)),
    )
}

fn currency_arg() -> Arg {
    Arg::new("currency")
        .long("currency")
        .help("Display currency (defaults to the saved preference)")
}

fn expense_cmd() -> Command {
    Command::new("expense")
        .about("Track expenses and income")
        .subcommand(
            Command::new("add")
                .about("Record an expense or income")
                .arg(Arg::new("date").long("date").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(
                    Arg::new("description")
                        .long("description")
                        .default_value(""),
                )
                .arg(Arg::new("merchant").long("merchant").default_value(""))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_parser(["expense", "income"])
                        .default_value("expense"),
                )
                .arg(
                    Arg::new("currency")
                        .long("currency")
                        .help("Currency the amount was recorded in"),
                ),
        )
        .subcommand(json_flags(filter_args(
            Command::new("list")
                .about("List records, filtered client-side")
                .arg(currency_arg())
                .arg(
                    Arg::new("hide")
                        .long("hide")
                        .help("Redact amounts")
                        .action(ArgAction::SetTrue),
                ),
        )))
        .subcommand(
            Command::new("edit")
                .about("Replace a record's fields")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(Arg::new("date").long("date").required(true))
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(
                    Arg::new("description")
                        .long("description")
                        .default_value(""),
                )
                .arg(Arg::new("merchant").long("merchant").default_value(""))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_parser(["expense", "income"])
                        .default_value("expense"),
                )
                .arg(
                    Arg::new("currency")
                        .long("currency")
                        .help("Currency the amount was recorded in"),
                ),
        )
        .subcommand(
            Command::new("rm").about("Delete a record").arg(
                Arg::new("id")
                    .required(true)
                    .value_parser(value_parser!(i64)),
            ),
        )
}

fn budget_cmd() -> Command {
    Command::new("budget").about("Per-category budgets").subcommand(json_flags(
        Command::new("list")
            .about("Show limits and spend in the display currency")
            .arg(currency_arg()),
    ))
}

fn goal_cmd() -> Command {
    Command::new("goal")
        .about("Spending, saving, and debt goals")
        .subcommand(
            Command::new("add")
                .about("Create a goal")
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_parser(["spending", "saving", "debt"])
                        .default_value("saving"),
                )
                .arg(
                    Arg::new("recurrence")
                        .long("recurrence")
                        .value_parser(["none", "weekly", "monthly", "yearly"])
                        .default_value("none"),
                )
                .arg(Arg::new("target").long("target").required(true))
                .arg(Arg::new("current").long("current").default_value("0"))
                .arg(Arg::new("date").long("date").help("Target date, YYYY-MM-DD"))
                .arg(
                    Arg::new("priority")
                        .long("priority")
                        .value_parser(["low", "medium", "high"])
                        .default_value("medium"),
                )
                .arg(Arg::new("color").long("color").default_value("#4e79a7"))
                .arg(Arg::new("icon").long("icon").default_value("target")),
        )
        .subcommand(json_flags(
            Command::new("list").about("List goals with progress").arg(currency_arg()),
        ))
        .subcommand(
            Command::new("rm").about("Delete a goal").arg(
                Arg::new("id")
                    .required(true)
                    .value_parser(value_parser!(i64)),
            ),
        )
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Summaries and chart series")
        .subcommand(json_flags(filter_args(
            Command::new("summary")
                .about("Income, expenses, and net")
                .arg(currency_arg()),
        )))
        .subcommand(json_flags(filter_args(
            Command::new("by-category")
                .about("Spend per category (pie-chart series)")
                .arg(currency_arg()),
        )))
        .subcommand(json_flags(filter_args(
            Command::new("monthly")
                .about("Income vs expenses per month")
                .arg(currency_arg()),
        )))
        .subcommand(json_flags(
            Command::new("category-spending")
                .about("Per-category spend converted server-side")
                .arg(currency_arg()),
        ))
}

fn currency_cmd() -> Command {
    Command::new("currency")
        .about("Currency registry, rates, and conversion")
        .subcommand(json_flags(Command::new("list").about("Known currencies")))
        .subcommand(json_flags(Command::new("rates").about("Exchange rates vs EUR")))
        .subcommand(
            Command::new("convert")
                .about("One-off conversion")
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(Arg::new("from").long("from").required(true))
                .arg(Arg::new("to").long("to").required(true)),
        )
        .subcommand(
            Command::new("set-display")
                .about("Persist the display currency")
                .arg(Arg::new("currency").required(true)),
        )
}

fn lang_cmd() -> Command {
    Command::new("lang")
        .about("UI language preference")
        .subcommand(
            Command::new("set")
                .about("Persist the language")
                .arg(Arg::new("language").required(true)),
        )
        .subcommand(Command::new("show").about("Show the saved language"))
}

fn connect_cmd() -> Command {
    Command::new("connect")
        .about("Bank integration link flow")
        .subcommand(Command::new("start").about("Request a short-lived widget token"))
        .subcommand(
            Command::new("finish")
                .about("Save the connection delivered by the widget")
                .arg(Arg::new("link-id").long("link-id").required(true))
                .arg(
                    Arg::new("institution-id")
                        .long("institution-id")
                        .required(true),
                )
                .arg(
                    Arg::new("institution-name")
                        .long("institution-name")
                        .required(true),
                ),
        )
}

fn export_cmd() -> Command {
    Command::new("export").about("Export data").subcommand(filter_args(
        Command::new("expenses")
            .about("Write records to CSV or JSON")
            .arg(
                Arg::new("format")
                    .long("format")
                    .value_parser(["csv", "json"])
                    .default_value("csv"),
            )
            .arg(Arg::new("out").long("out").required(true)),
    ))
}

pub fn build_cli() -> Command {
    Command::new("moneylens")
        .about("Multi-currency expense dashboard companion")
        .version(clap::crate_version!())
        .subcommand(expense_cmd())
        .subcommand(budget_cmd())
        .subcommand(goal_cmd())
        .subcommand(report_cmd())
        .subcommand(currency_cmd())
        .subcommand(lang_cmd())
        .subcommand(connect_cmd())
        .subcommand(export_cmd())
}
