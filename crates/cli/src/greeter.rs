// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Writes the greeting.
//!
//! Three blocks go out in order, each followed by a newline, and the
//! writer is flushed at the end. The first failure stops the run.

use std::io::{self, Write};

use crate::error::Result;
use crate::message::Message;

/// Prints a [`Message`] to any writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeter<'a> {
    message: Message<'a>,
}

impl<'a> Greeter<'a> {
    pub fn new(message: Message<'a>) -> Self {
        Self { message }
    }

    pub fn message(&self) -> Message<'a> {
        self.message
    }

    /// Write all three blocks to `out`, then flush it.
    pub fn run<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        for (index, block) in self.message.blocks().iter().enumerate() {
            writeln!(out, "{}", block)?;
            tracing::trace!(block = index, bytes = block.len() + 1, "wrote block");
        }
        out.flush()?;
        Ok(())
    }

    /// The exact text [`Greeter::run`] writes.
    pub fn render(&self) -> String {
        let mut rendered = String::new();
        for block in self.message.blocks() {
            rendered.push_str(&block);
            rendered.push('\n');
        }
        rendered
    }
}

impl Default for Greeter<'static> {
    fn default() -> Self {
        Self::new(Message::default())
    }
}

/// Greet on the process's standard output.
pub fn run() -> Result<()> {
    let greeter = Greeter::default();
    tracing::debug!(
        message = greeter.message().text(),
        bytes = greeter.render().len(),
        "greeting on stdout"
    );
    let stdout = io::stdout();
    let mut out = stdout.lock();
    greeter.run(&mut out)
}

#[cfg(test)]
#[path = "greeter_tests.rs"]
mod tests;
