#![allow(dead_code)]

pub mod command;
pub mod file;

use beargit::COMMIT_MARKER;

/// A commit message that passes the marker check
pub fn bear_message(summary: &str) -> String {
    format!("{summary} {COMMIT_MARKER}")
}
