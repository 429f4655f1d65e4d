#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use autovalue_core::config::ENV_BACKEND_URL;
use autovalue_core::{init_backend, BackendClient, BackendConfig, CoreResult};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use reqwest::Url;

/// Default location for persisted sessions
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("autovalue")
}

/// AutoValue - vehicle valuations
#[derive(Parser, Debug)]
#[command(name = "autovalue-desktop")]
#[command(about = "AutoValue - vehicle valuation desktop client")]
struct Args {
    /// Backend base URL (overrides AUTOVALUE_BACKEND_URL)
    #[arg(long)]
    backend_url: Option<String>,

    /// Data directory for the persisted session
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Callback URL carrying a session in its fragment (deep-link sign-in)
    #[arg(long)]
    callback_url: Option<String>,

    /// Skip the backend entirely and show bundled sample data
    #[arg(long)]
    offline: bool,
}

fn main() {
    autovalue_core::logging::init_logging();

    let args = Args::parse();

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);

    if args.offline {
        tracing::info!("Offline mode, backend bootstrap skipped");
    } else {
        match bootstrap_backend(&args, &data_dir) {
            Ok(client) => {
                tracing::info!(logged_in = client.is_logged_in(), "Backend ready");
            }
            Err(e) => {
                tracing::error!("Backend unavailable, continuing offline: {}", e);
            }
        }
    }

    tracing::info!("Starting AutoValue with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("AutoValue")
            .with_inner_size(dioxus::desktop::LogicalSize::new(760.0, 880.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

/// Build the process-wide backend client from the environment plus CLI
/// overrides, then pick up a session from the callback URL if one was given
fn bootstrap_backend(args: &Args, data_dir: &Path) -> CoreResult<Arc<BackendClient>> {
    let config = BackendConfig::from_lookup(|key| {
        if key == ENV_BACKEND_URL {
            if let Some(url) = &args.backend_url {
                return Some(url.clone());
            }
        }
        std::env::var(key).ok()
    })?;

    let client = init_backend(config, data_dir)?;

    if let Some(raw) = &args.callback_url {
        match Url::parse(raw) {
            Ok(url) => {
                client.recover_session_from_url(&url)?;
            }
            Err(e) => tracing::warn!("Ignoring malformed callback URL: {}", e),
        }
    }

    Ok(client)
}
