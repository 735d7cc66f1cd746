// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error type for writing the greeting.

use thiserror::Error;

/// The output stream refused a write or flush.
///
/// Not retried. Callers hand it up to the process boundary.
#[derive(Debug, Error)]
pub enum GreetError {
    #[error("failed to write greeting: {0}")]
    Io(#[from] std::io::Error),
}

impl GreetError {
    /// Underlying I/O error kind, e.g. `BrokenPipe` for a closed reader.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            GreetError::Io(e) => e.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;
