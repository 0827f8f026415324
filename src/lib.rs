pub mod api_client;
mod app;
pub mod config;
mod error;
pub mod nav;
pub mod postings;
pub mod signup;
mod templ_manager;
pub mod web;

pub use api_client::ApiClient;
pub use app::{App, AppState};
pub use error::{Error, Result};
pub use templ_manager::TemplateManager;
pub use web::serve;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Compact console logging for development, `debug` unless `RUST_LOG` says otherwise.
pub fn init_dbg_tracing() {
    tracing_subscriber::fmt()
        .without_time()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .compact()
        .init();
}

pub fn init_production_tracing() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}
