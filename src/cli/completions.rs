//! Shell completions command implementation

use crate::cli::{Cli, CompletionsArgs};
use clap::CommandFactory;

/// Handle the `completions` command: write a completion script to stdout.
pub fn handle_completions(args: &CompletionsArgs) {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "itinera", &mut std::io::stdout());
}
