/// Vinyl Vote - command-line client for the album voting catalog
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vinyl_cli::{App, AppConfig, Command};

#[derive(Parser)]
#[command(name = "vinyl")]
#[command(about = "Browse and vote on the Vinyl Vote album catalog", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./vinyl.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vinyl_cli=info,vinyl_state=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    tracing::debug!(
        base_url = %config.api.base_url,
        session_file = %config.storage.path.display(),
        "Configuration loaded"
    );

    let app = App::new(&config)?;
    let mut stdout = std::io::stdout();
    app.run(cli.command, &mut stdout).await?;

    Ok(())
}
