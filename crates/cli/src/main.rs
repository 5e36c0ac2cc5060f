mod render;
mod screens;
mod state;
mod view_state;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moviedex_core::{load_config, validate_config, OmdbClient, SqliteRecordStore};

use screens::Screen;
use state::AppState;
use view_state::ViewState;

/// Look films up in an online catalog and keep a local film database
#[derive(Parser, Debug)]
#[command(name = "moviedex", version)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, env = "MOVIEDEX_CONFIG", default_value = "moviedex.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add the built-in films to the database
    Seed,
    /// Look a film up by exact title
    Lookup {
        #[arg(num_args = 0..)]
        title: Vec<String>,
    },
    /// Save the film shown by the last lookup
    Save,
    /// Search the catalog for titles containing a fragment
    Search {
        #[arg(num_args = 0..)]
        fragment: Vec<String>,
    },
    /// Search the database for films featuring an actor
    Actors {
        #[arg(num_args = 0..)]
        name: Vec<String>,
    },
    /// Show a screen's last view again
    Show {
        #[arg(value_enum)]
        screen: Screen,
    },
    /// Print the effective configuration (API key redacted)
    Config,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr; stdout carries screen text only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    debug!("Loading configuration from {:?}", cli.config);
    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Database path: {:?}", config.database.path);

    let catalog = OmdbClient::from_config(&config.catalog)
        .context("Failed to create catalog client")?;
    let store = SqliteRecordStore::new(&config.database.path)
        .context("Failed to open record store")?;

    let state_path = config.state.path.clone();
    let state = AppState::new(config, Arc::new(catalog), Arc::new(store));
    let mut view = ViewState::load(&state_path);

    let output = match cli.command {
        Command::Seed => screens::seed(&state).await?,
        Command::Lookup { title } => screens::lookup(&state, &mut view, &title.join(" ")).await?,
        Command::Save => screens::save(&state, &view).await?,
        Command::Search { fragment } => {
            screens::search_titles(&state, &mut view, &fragment.join(" ")).await?
        }
        Command::Actors { name } => {
            screens::search_actors(&state, &mut view, &name.join(" ")).await?
        }
        Command::Show { screen } => screens::show(&view, screen)?,
        Command::Config => serde_json::to_string_pretty(&state.sanitized_config())
            .context("Failed to serialize configuration")?,
    };

    println!("{}", output);

    view.save(&state_path)?;
    info!("View state saved to {:?}", state_path);

    Ok(())
}
