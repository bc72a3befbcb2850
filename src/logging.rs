//! Tracing subscriber setup
//!
//! `RUST_LOG` overrides the per-environment defaults. sqlx reports every
//! statement under the `sqlx::query` target at DEBUG and slow ones at WARN,
//! so dev shows each statement while staging and prod only surface slow ones.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Environment, LogFormat, Settings};

/// Filter directives used when `RUST_LOG` is unset
pub fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Dev => "trivia_api=debug,tower_http=debug,sqlx::query=debug,info",
        Environment::Staging => "trivia_api=debug,tower_http=info,sqlx::query=warn,info",
        Environment::Prod => "trivia_api=info,tower_http=info,sqlx::query=warn,warn",
    }
}

pub fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&settings.env)));

    let source_locations = settings.env.is_dev();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(source_locations)
        .with_line_number(source_locations);

    let registry = tracing_subscriber::registry().with(filter);
    match settings.log_format {
        LogFormat::Json => registry.with(fmt_layer.json()).init(),
        LogFormat::Pretty => registry.with(fmt_layer.pretty()).init(),
    }

    tracing::info!(
        env = ?settings.env,
        format = ?settings.log_format,
        "Logging initialized"
    );
}
