//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Environment;

/// Default filter directive per environment. `RUST_LOG` overrides it.
pub fn default_directive(environment: Environment) -> &'static str {
    match environment {
        Environment::Local | Environment::Dev => "songlib_api=debug,songlib_db=debug,tower_http=debug",
        Environment::Test => "warn",
        Environment::Prod => "songlib_api=info,songlib_db=info,tower_http=info",
    }
}

/// Install the global subscriber.
///
/// `local` logs human-readable text; every other environment logs JSON.
pub fn init(environment: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(environment).into());

    let registry = tracing_subscriber::registry().with(filter);

    match environment {
        Environment::Local => registry.with(tracing_subscriber::fmt::layer()).init(),
        Environment::Dev | Environment::Test | Environment::Prod => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}
