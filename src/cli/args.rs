//! CLI argument definitions using clap

use clap::Parser;

/// Forward a command to the Stripe API and print a JSON envelope.
///
/// There are no flags: every argument is positional, so `--help` in the
/// `json_data` slot is data like any other.
#[derive(Parser)]
#[command(name = "stripe-bridge")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Stripe secret API key
    pub api_key: String,

    /// Command to run
    pub command: String,

    /// JSON object with the command's string parameters
    #[arg(allow_hyphen_values = true)]
    pub json_data: Option<String>,

    /// Arguments past `json_data` are accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,
}
