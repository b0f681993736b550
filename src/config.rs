use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AppError, AppResult};
use crate::query_builder::{ComparisonOperator, DEFAULT_LIMIT, DEFAULT_OPERATOR};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Fallbacks for query requests that leave a parameter out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    pub default_operator: ComparisonOperator,
    pub default_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            query: QueryConfig {
                default_operator: DEFAULT_OPERATOR,
                default_limit: DEFAULT_LIMIT,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let default_operator = match lookup("QUERY_DEFAULT_OPERATOR") {
            Some(op) => op.parse().map_err(|_| {
                AppError::ConfigurationError(format!(
                    "QUERY_DEFAULT_OPERATOR must be one of =, >, <, >=, <=, <> (got {:?})",
                    op
                ))
            })?,
            None => defaults.query.default_operator,
        };

        Ok(Self {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port: lookup("SERVER_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            query: QueryConfig {
                default_operator,
                default_limit: lookup("QUERY_DEFAULT_LIMIT")
                    .and_then(|l| l.parse().ok())
                    .unwrap_or(defaults.query.default_limit),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
