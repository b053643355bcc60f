/// Album Catalog Server - HTTP API for a music album catalog
use catalog_core::AlbumStore;
use catalog_server::{config::ServerConfig, create_router, state::AppState};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "Album catalog HTTP server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "CATALOG_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print every album in the catalog
    ListAlbums {
        /// Configuration file path
        #[arg(short, long, env = "CATALOG_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "catalog_server=info,catalog_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::ListAlbums { config } => {
            list_albums(config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting album catalog server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let store = catalog_storage::open(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    tracing::info!("Database connected");

    let app_state = AppState::new(Arc::new(store));
    let app = create_router(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn list_albums(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let store = catalog_storage::open(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;

    let albums = store.list_albums().await?;

    println!("Albums:");
    for album in albums {
        let rating = album
            .rating
            .map_or_else(|| "-".to_string(), |r| r.to_string());
        println!(
            "  {} - {} ({}) by {} [rating: {}]",
            album.external_id, album.name, album.year, album.artist, rating
        );
    }

    Ok(())
}
