// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{error, fmt, io};

#[derive(Debug)]
pub enum CleanError {
    Io(io::Error),
    // Header of the `record`-th record (1-based) has no second '|'-delimited field.
    MalformedHeader { record: usize, header: String },
    Format(String),
}

// These allow conversion to CleanError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for CleanError {
    fn from(e: io::Error) -> Self {
        CleanError::Io(e)
    }
}

impl From<String> for CleanError {
    fn from(s: String) -> Self {
        CleanError::Format(s)
    }
}

impl fmt::Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanError::Io(e) => write!(f, "I/O error: {}", e),
            CleanError::MalformedHeader { record, header } => write!(
                f,
                "Malformed header in record {}: expected '|'-delimited name field in '{}'",
                record, header
            ),
            CleanError::Format(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl error::Error for CleanError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            CleanError::Io(e) => Some(e),
            _ => None,
        }
    }
}
