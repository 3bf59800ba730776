#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Base URL of the generation services, overridable for self-hosting
pub fn generation_base_url() -> String {
    std::env::var("EVERWISH_GENERATION_URL")
        .unwrap_or_else(|_| "http://localhost:8788".to_string())
}

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("everwish")
    })
}

/// Everwish - a birthday surprise behind a countdown and a magic word
#[derive(Parser, Debug)]
#[command(name = "everwish-desktop")]
#[command(about = "Everwish - local-first birthday surprise page")]
struct Args {
    /// Data directory for storage (use different dirs for multiple instances)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: everwish-<name>)
    #[arg(short, long)]
    name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = if let Some(dir) = args.data_dir {
        dir
    } else if let Some(ref name) = args.name {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!("everwish-{}", name))
    } else {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("everwish")
    };

    // Store data directory globally
    let _ = DATA_DIR.set(data_dir.clone());

    tracing::info!("Starting Everwish with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Everwish")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
