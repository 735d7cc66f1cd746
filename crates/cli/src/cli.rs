// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command line surface.
//!
//! The command takes no flags. Whatever is passed is accepted and ignored.

use std::ffi::OsString;

use clap::Parser;

/// Prints an encouraging message
#[derive(Debug, Parser)]
#[command(name = "greeter")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    ignored: Vec<OsString>,
}

impl Cli {
    /// Number of arguments that were passed and dropped.
    pub fn ignored_count(&self) -> usize {
        self.ignored.len()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
