// Copyright (c) 2025 Spendleaf Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn user_arg() -> Arg {
    Arg::new("user")
        .long("user")
        .value_name("USER")
        .required(true)
        .help("Owner of the expense records")
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("spendleaf")
        .about("Personal expense tracking with a monthly spending dashboard")
        .version(crate_version!())
        .subcommand(Command::new("init").about("Initialize the database and print its location"))
        .subcommand(
            Command::new("expense")
                .about("Manage expense records")
                .subcommand(
                    Command::new("add")
                        .about("Record a new expense")
                        .arg(user_arg())
                        .arg(
                            Arg::new("name")
                                .long("name")
                                .required(true)
                                .help("Display label, e.g. 'Groceries'"),
                        )
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Positive decimal amount"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("Category id (see 'category list')"),
                        )
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Transaction date YYYY-MM-DD, defaults to today"),
                        )
                        .arg(Arg::new("note").long("note").help("Optional description")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expense records")
                        .arg(user_arg())
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("Only the given calendar month, YYYY-MM"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Only the given category id"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("At most N records"),
                        ),
                ))
                .subcommand(
                    Command::new("show")
                        .about("Show a single expense record")
                        .arg(Arg::new("id").required(true).help("Expense id")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense record")
                        .arg(Arg::new("id").required(true).help("Expense id"))
                        .arg(user_arg())
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .short('y')
                                .action(ArgAction::SetTrue)
                                .help("Skip the confirmation prompt"),
                        ),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Financial overview: total, this month, last month, recent activity")
                .arg(user_arg())
                .arg(
                    Arg::new("as-of")
                        .long("as-of")
                        .help("Reference date YYYY-MM-DD, defaults to today"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the summary as JSON"),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Spending categories")
                .subcommand(Command::new("list").about("List the known categories")),
        )
        .subcommand(
            Command::new("export")
                .about("Export records to a file")
                .subcommand(
                    Command::new("expenses")
                        .about("Export one user's expenses")
                        .arg(user_arg())
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .required(true)
                                .help("csv or json"),
                        )
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .required(true)
                                .help("Output file path"),
                        ),
                ),
        )
}
