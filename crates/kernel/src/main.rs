//! Depot Kernel
//!
//! Serves the access API, or answers one-shot navigation and feature
//! queries from the command line.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method};
use clap::{Parser, Subcommand};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use depot_kernel::access::Feature;
use depot_kernel::menu::{default_navigation, filter_navigation, load_navigation};
use depot_kernel::models::read_user_file;
use depot_kernel::{AppState, Config, routes};

/// Depot warehouse console access layer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP access API (default).
    Serve,

    /// Print the navigation tree visible to a user as JSON.
    Nav {
        /// User snapshot JSON file; omit for an anonymous user.
        #[arg(long)]
        user: Option<PathBuf>,

        /// YAML navigation tree; defaults to NAVIGATION_FILE or the built-in tree.
        #[arg(long)]
        navigation: Option<PathBuf>,
    },

    /// Print whether a user may use a feature (entry, transaction, tasks, task_history).
    Check {
        /// User snapshot JSON file; omit for an anonymous user.
        #[arg(long)]
        user: Option<PathBuf>,

        /// Feature to check.
        feature: Feature,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&load_config()?).await,
        Command::Nav { user, navigation } => {
            let navigation = match navigation {
                Some(path) => Some(path),
                None => load_config()?.navigation_file,
            };
            println!("{}", nav_output(user.as_deref(), navigation.as_deref())?);
            Ok(())
        }
        Command::Check { user, feature } => {
            println!("{}", check_output(user.as_deref(), feature)?);
            Ok(())
        }
    }
}

fn load_config() -> Result<Config> {
    Config::from_env().context("failed to load configuration")
}

/// Navigation visible to the user in `user_path`, as pretty JSON.
fn nav_output(user_path: Option<&Path>, navigation: Option<&Path>) -> Result<String> {
    let user = read_user_file(user_path)?;
    let tree = match navigation {
        Some(path) => load_navigation(path)?,
        None => default_navigation(),
    };
    let visible = filter_navigation(&tree, user.as_ref());
    Ok(serde_json::to_string_pretty(&visible)?)
}

/// `true` or `false`; a denied feature is an answer, not a failure.
fn check_output(user_path: Option<&Path>, feature: Feature) -> Result<String> {
    let user = read_user_file(user_path)?;
    Ok(feature.allows(user.as_ref()).to_string())
}

async fn serve(config: &Config) -> Result<()> {
    info!("Starting Depot access API");

    let state = AppState::new(config).context("failed to initialize application state")?;

    let cors = build_cors_layer(config);

    let app: Router = routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,depot_kernel=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
