// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Anchored prefix matching.

use crate::error::{CheckError, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// Commit categories accepted at the start of a message.
pub const PREFIXES: [&str; 7] = ["core", "desktop", "web", "avm1", "docs", "chore", "tests"];

lazy_static! {
    /// Regex for the accepted message format: a recognized prefix followed
    /// by the two literal characters `:` and ` `. No word boundary is
    /// applied after the token.
    static ref COMMIT_MSG_REGEX: Regex =
        Regex::new(&format!("^({}): ", PREFIXES.join("|"))).unwrap();
}

/// Returns true if `message` starts with `<prefix>: ` for one of the
/// recognized prefixes.
///
/// The match is case-sensitive and anchored at the first character; the
/// input is not trimmed, and anything (including nothing) may follow the
/// required space.
pub fn is_valid(message: &str) -> bool {
    COMMIT_MSG_REGEX.is_match(message)
}

/// Check a commit message, returning a diagnostic error on rejection.
pub fn check(message: &str) -> Result<()> {
    if is_valid(message) {
        Ok(())
    } else {
        Err(CheckError::InvalidPrefixFormat {
            message: message.to_string(),
        })
    }
}
