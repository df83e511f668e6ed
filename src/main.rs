use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use stripe_bridge::adapters::{StripeConfig, StripePaymentAdapter};
use stripe_bridge::application::{envelope, CommandError, CommandRegistry};
use stripe_bridge::cli::{Cli, CliError};
use stripe_bridge::config::AppConfig;
use stripe_bridge::logging;
use stripe_bridge::ports::PaymentProvider;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            let err = CliError::Usage(program_name());
            eprintln!("{}", err);
            return ExitCode::from(err.exit_code());
        }
    };

    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            let code = envelope::emit(
                &cli.command,
                Err(CommandError::from(e)),
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            );
            return ExitCode::from(code);
        }
    };

    logging::init(&config.log);

    let stripe_config = StripeConfig::from_app_config(cli.api_key, &config);
    if !stripe_config.is_test_mode() && !stripe_config.is_live_mode() {
        tracing::warn!("API key does not look like a Stripe secret or restricted key");
    }
    tracing::debug!(
        base_url = stripe_config.api_base_url(),
        test_mode = stripe_config.is_test_mode(),
        "Stripe client configured"
    );

    let payment_provider: Arc<dyn PaymentProvider> =
        Arc::new(StripePaymentAdapter::new(stripe_config));
    let registry = CommandRegistry::new(payment_provider);
    tracing::debug!(commands = ?registry.names().collect::<Vec<_>>(), "Commands registered");

    let result = registry
        .dispatch(&cli.command, cli.json_data.as_deref())
        .await;

    let code = envelope::emit(
        &cli.command,
        result,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(code)
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stripe-bridge".to_string())
}
