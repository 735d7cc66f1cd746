// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

use greeter::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    greeter::logging::init();
    tracing::debug!(ignored = cli.ignored_count(), "arguments ignored");

    greeter::run()?;
    Ok(())
}
