// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prints an encouraging message to standard output.

pub mod cli;
pub mod error;
pub mod greeter;
pub mod logging;
pub mod message;

pub use error::{GreetError, Result};
pub use greeter::{Greeter, run};
pub use message::{BASE_MESSAGE, Message, shout};
