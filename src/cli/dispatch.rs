// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::error::Result;
use crate::rules;

use super::args::Cli;

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!("Checking commit message: {:?}", cli.message);

    rules::check(&cli.message)
}
