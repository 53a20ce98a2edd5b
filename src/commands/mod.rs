//! Command implementations for autoconcept.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. `generate` and `preview` share flag resolution
//! ([`selection`]) and the random draft of a run ([`draft`]).

mod draft;
mod generate;
mod init;
mod preview;
mod selection;

use crate::cli::{Command, GenerateArgs};
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// With no subcommand the top-level flags are treated as `generate` flags.
pub fn dispatch(command: Option<Command>, default_args: GenerateArgs) -> Result<()> {
    match command {
        None => generate::cmd_generate(default_args),
        Some(Command::Generate(args)) => generate::cmd_generate(args),
        Some(Command::Preview(args)) => preview::cmd_preview(args),
        Some(Command::Init(args)) => init::cmd_init(args),
    }
}
