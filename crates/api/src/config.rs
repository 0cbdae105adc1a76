use std::str::FromStr;

/// Deployment environment, selected by `ENVIRONMENT`.
///
/// Drives the log format and default verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Dev,
    Test,
    Prod,
}

impl Environment {
    /// Unknown values fall back to [`Environment::Local`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dev" => Self::Dev,
            "test" => Self::Test,
            "prod" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: Environment,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `5`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
}

/// Connection settings for PostgreSQL.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                  |
    /// |-------------------------|--------------------------|
    /// | `ENVIRONMENT`           | `local`                  |
    /// | `HOST`                  | `0.0.0.0`                |
    /// | `PORT`                  | `8080`                   |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS`  | `5`                      |
    /// | `DATABASE_URL`          | built from `PG_*`        |
    /// | `DB_MAX_CONNECTIONS`    | `20`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.into());

        let environment = Environment::parse(&var("ENVIRONMENT", "local"));
        let host = var("HOST", "0.0.0.0");
        let port = parse_var("PORT", var("PORT", "8080"))?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_var("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "5"))?;

        let url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                var("PG_USER", "postgres"),
                var("PG_PASS", "postgres"),
                var("PG_HOST", "localhost"),
                var("PG_PORT", "5432"),
                var("PG_DATABASE", "songs"),
            ),
        };
        let max_connections = parse_var("DB_MAX_CONNECTIONS", var("DB_MAX_CONNECTIONS", "20"))?;

        Ok(Self {
            environment,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database: DatabaseConfig {
                url,
                max_connections,
            },
        })
    }
}

fn parse_var<T: FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}
