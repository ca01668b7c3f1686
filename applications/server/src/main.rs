/// Production Journal Server - local journal and song registry for music production
use clap::{Parser, Subcommand};
use journal_server::{config::ServerConfig, create_router, state::AppState};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "journal-server")]
#[command(about = "Production journal server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the journal files, newest first
    Entries {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Commit and push the working tree once
    Sync {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "journal_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(load_config(config)?).await?;
        }
        Commands::Entries { config } => {
            list_entries(load_config(config)?).await?;
        }
        Commands::Sync { config } => {
            sync(load_config(config)?).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Production Journal Server");
    tracing::info!("Journal entries: {}", config.storage.journal_dir.display());
    tracing::info!("Song registry: {}", config.storage.songs_file.display());

    let app_state = AppState::from_config(&config);
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Open http://localhost:{} to access the journal", config.server.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn list_entries(config: ServerConfig) -> anyhow::Result<()> {
    let app_state = AppState::from_config(&config);
    let files = app_state.journal.list_files().await?;

    println!("Journal entries ({}):", files.len());
    for file in files {
        println!("  {}  {}", file.modified.format("%Y-%m-%d %H:%M"), file.path);
    }

    Ok(())
}

async fn sync(config: ServerConfig) -> anyhow::Result<()> {
    let app_state = AppState::from_config(&config);
    let report = app_state.git.commit_and_push().await?;

    println!("{}", report.message);
    if !report.output.is_empty() {
        println!("{}", report.output);
    }

    if !report.success {
        anyhow::bail!("git sync failed");
    }
    Ok(())
}
