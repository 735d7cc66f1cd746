// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The greeting text and its derived display forms.
//!
//! Only [`BASE_MESSAGE`] is stored. The shouted form is rebuilt from it on
//! every call and dropped once written.

/// The message everything else is derived from.
pub const BASE_MESSAGE: &str = "you are great";

/// Final line of the greeting.
pub const CLOSING: &str = "Keep up the amazing work! 💪";

/// Decoration placed on both sides of the shouted message.
pub const STAR: &str = "🌟";

/// Uppercase `message`, add an exclamation mark, and wrap it in stars.
///
/// `shout("you are great")` is `"🌟 YOU ARE GREAT! 🌟"`.
pub fn shout(message: &str) -> String {
    format!("{STAR} {}! {STAR}", message.to_uppercase())
}

/// A message together with the blocks printed for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<'a> {
    text: &'a str,
}

impl<'a> Message<'a> {
    pub const fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Output blocks in print order. Each block is written followed by a
    /// line terminator; the second one starts with its own blank line.
    pub fn blocks(&self) -> [String; 3] {
        [
            self.text.to_string(),
            format!("\n{}", shout(self.text)),
            CLOSING.to_string(),
        ]
    }
}

impl Default for Message<'static> {
    fn default() -> Self {
        Self::new(BASE_MESSAGE)
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
