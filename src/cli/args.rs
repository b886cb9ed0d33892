// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;

lazy_static::lazy_static! {
    static ref VERSION_STRING: String = crate::version::version_string();
}

/// commit-check - Commit Message Prefix Linter
///
/// Checks that a commit message starts with a recognized category prefix.
#[derive(Parser, Debug)]
#[command(name = "commit-check")]
#[command(author = "Eshan Roy")]
#[command(version = VERSION_STRING.as_str())]
#[command(about = "Commit message prefix linter", long_about = None)]
pub struct Cli {
    /// The full commit message text to check
    #[arg(value_name = "COMMIT_MESSAGE")]
    pub message: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_single_positional_message() {
        let cli = Cli::try_parse_from(["commit-check", "core: fix thing"]).unwrap();
        assert_eq!(cli.message, "core: fix thing");
        assert!(!cli.debug);
    }

    #[test]
    fn test_parses_debug_flag() {
        let cli = Cli::try_parse_from(["commit-check", "--debug", "docs: typo"]).unwrap();
        assert!(cli.debug);
    }

    #[test]
    fn test_requires_message_argument() {
        assert!(Cli::try_parse_from(["commit-check"]).is_err());
    }
}
