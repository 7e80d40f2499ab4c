// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! k0test binary entry point.

use clap::Parser;

use k0test::cli::{Cli, Command};
use k0test::commands::{self, CommandError};
use k0test::config::HarnessConfig;
use k0test::exit_codes;
use k0test::output_diagnostic::print_error;
use k0test_capture::OutputSink;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let code = match dispatch(&cli).await {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

async fn dispatch(cli: &Cli) -> Result<i32, CommandError> {
    let cwd = std::env::current_dir().unwrap_or_default();
    let config = HarnessConfig::discover(cli.config.as_deref(), &cwd)?;
    let sink = OutputSink::stdout();

    let code = match &cli.command {
        Command::GenLex(args) => commands::gen_lex(&config, args, &sink)?,
        Command::Run(args) => commands::run(&config, args, &sink, cli.verbose).await?,
        Command::Categories => commands::categories(&config.categories, &sink)?,
    };
    sink.flush().map_err(CommandError::Output)?;
    Ok(code)
}
