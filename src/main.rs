#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use facewall_core::{FetchOptions, DEFAULT_BATCH_SIZE, DEFAULT_NATIONALITY};

/// Global fetch options, set once from the command line
static FETCH_OPTIONS: OnceLock<FetchOptions> = OnceLock::new();

/// Get the fetch options for this session (command line or defaults)
pub fn fetch_options() -> FetchOptions {
    FETCH_OPTIONS.get().cloned().unwrap_or_default()
}

/// Facewall - Random Profile Gallery
#[derive(Parser, Debug)]
#[command(name = "facewall-desktop")]
#[command(about = "Facewall - a gallery of randomly generated profiles")]
struct Args {
    /// Number of profiles to load per session
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    results: usize,

    /// Nationality code passed to the profile API (e.g. "us", "gb")
    #[arg(short, long, default_value = DEFAULT_NATIONALITY)]
    nationality: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let options = FetchOptions {
        nationality: args.nationality,
        results: args.results,
        ..FetchOptions::default()
    };

    tracing::info!(
        results = options.results,
        nationality = %options.nationality,
        "starting facewall"
    );
    let _ = FETCH_OPTIONS.set(options);

    // Wide window: the card grid wants room for 3-4 columns
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Facewall")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 850.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
