use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use screening_server::config::AppConfig;
use screening_server::manifest::{self, MANIFEST_FILE};
use screening_server::state::AppState;
use screening_server::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "screening-server",
    about = "Serve self-administered screening questionnaires",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server (default command)
    Serve(ServeArgs),
    /// Scan a slides directory and write its manifest
    SlidesManifest(ManifestArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ManifestArgs {
    /// Directory containing one folder of slides per condition
    #[arg(long)]
    dir: PathBuf,
    /// Output file (defaults to manifest.json inside --dir)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(config, args).await,
        Command::SlidesManifest(args) => {
            let output = args.output.unwrap_or_else(|| args.dir.join(MANIFEST_FILE));
            manifest::write_manifest(&args.dir, &config.content.slides_prefix, &output)?;
            Ok(())
        }
    }
}

async fn serve(mut config: AppConfig, args: ServeArgs) -> eyre::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let state = AppState::from_config(&config)?;
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, screening_server::app(state)).await?;
    Ok(())
}
