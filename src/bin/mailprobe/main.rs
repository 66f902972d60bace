mod args;
mod output;

use anyhow::{Context, Result};
use mailprobe::Verifier;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::args::{Cli, Commands, server_config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailprobe=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = <Cli as clap::Parser>::parse();
    let verifier = Verifier::from_system_conf(cli.probe.options())
        .context("initialise DNS resolver")?;

    match cli.cmd {
        Commands::Serve {
            listen,
            request_timeout_secs,
        } => {
            let config = server_config(listen, request_timeout_secs);
            mailprobe::server::serve(config, verifier)
                .await
                .context("run HTTP server")?;
        }
        Commands::Check { email, format } => {
            let report = verifier.verify(&email).await;
            output::write_report(&report, &format)?;
            // codes de sortie : 0 confirmée, 2 non confirmée, 1 fatal
            if !report.is_deliverable() {
                std::process::exit(2);
            }
        }
    }
    Ok(())
}
