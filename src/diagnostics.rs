//! Diagnostics written to stderr. Stdout carries only the JSON document.

use std::fmt::Display;

/// Message text used for `bail!` and `.with_context(..)`.
pub fn error_message(msg: impl Display) -> String {
    msg.to_string()
}

pub fn warn(msg: impl Display) {
    eprintln!("warning: {}", msg);
}
