use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, Subcommand};
use gallery_config::{Config, ConfigLoad, ConfigLoader, ConfigLoaderOptions, telemetry};
use gallery_core::PostgresCatalogueStore;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "gallery-init", about = "Gallery configuration and database bootstrapper")]
struct Cli {
    /// Configuration file; defaults to GALLERY_CONFIG, then ./gallery.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Env file read before the process environment
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate configuration and print the effective values
    Check {
        /// Also open a connection to the configured database
        #[arg(long)]
        connect: bool,
    },
    /// Apply the embedded schema migrations
    Migrate,
    /// Load the demo gallery into an empty database
    Seed {
        /// Run migrations first
        #[arg(long)]
        migrate: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let ConfigLoad { config, warnings } = ConfigLoader::with_options(ConfigLoaderOptions {
        config_path: cli.config,
        env_file: cli.env_file,
    })
    .load()
    .context("failed to load configuration")?;

    telemetry::init_tracing(&config.logging.filter)?;
    for warning in &warnings.items {
        match &warning.hint {
            Some(hint) => warn!(hint = %hint, "{}", warning.message),
            None => warn!("{}", warning.message),
        }
    }

    match cli.command {
        Command::Check { connect } => {
            print_config(&config);
            if connect {
                let store = connect_store(&config).await?;
                info!(?store, "database reachable");
            }
        }
        Command::Migrate => {
            let store = connect_store(&config).await?;
            store.migrate().await?;
        }
        Command::Seed { migrate } => {
            let store = connect_store(&config).await?;
            if migrate {
                store.migrate().await?;
            }
            let summary = gallery_core::demo::seed(&store, Utc::now()).await?;
            println!(
                "seeded {} artists, {} artworks, {} exhibitions, {} likes",
                summary.artists, summary.artworks, summary.exhibitions, summary.likes
            );
        }
    }

    Ok(())
}

async fn connect_store(config: &Config) -> Result<PostgresCatalogueStore> {
    let Some(url) = config.database.url.as_deref() else {
        bail!("no database configured; set DATABASE_URL or database.url");
    };
    let store = PostgresCatalogueStore::connect(url, config.database.max_connections).await?;
    Ok(store)
}

fn print_config(config: &Config) {
    let source = config
        .metadata
        .config_path
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "<environment only>".to_string());

    println!("config file:        {source}");
    println!("env file loaded:    {}", config.metadata.env_file_loaded);
    println!("dev mode:           {}", config.dev_mode);
    println!(
        "database url:       {}",
        config
            .database
            .redacted_url()
            .unwrap_or_else(|| "<none>".to_string())
    );
    println!("max connections:    {}", config.database.max_connections);
    println!("page size:          {}", config.catalogue.default_page_size);
    println!("api page size:      {}", config.catalogue.api_page_size);
    println!("anonymous likes:    {}", config.catalogue.allow_anonymous_likes);
    println!("log filter:         {}", config.logging.filter);
    println!(
        "password pepper:    {}",
        if config.auth.is_default_pepper() {
            "placeholder"
        } else {
            "configured"
        }
    );
}
