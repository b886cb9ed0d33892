// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Prefix rule for commit messages.
//!
//! This module decides whether a commit message starts with one of the
//! recognized category prefixes.

mod prefix;

pub use prefix::{check, is_valid, PREFIXES};
