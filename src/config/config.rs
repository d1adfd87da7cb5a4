use dotenv::dotenv;
use std::num::ParseIntError;
use thiserror::Error;

const DEFAULT_POOL_SIZE: usize = 16;
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_CONFIG: &str = "./log-config.yml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("failed to parse {name}: {source}")]
    Invalid {
        name: &'static str,
        source: ParseIntError,
    },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_ca_file: Option<String>,
    pub database_pool_size: usize,
    pub server_host: String,
    pub server_port: u16,
    pub log_config: String,
}

impl Config {
    pub fn init() -> Result<Config, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let database_ca_file = var("DATABASE_CA_FILE");

        let database_pool_size = match var("DATABASE_POOL_SIZE") {
            Some(size) => size.trim().parse::<usize>().map_err(|source| ConfigError::Invalid {
                name: "DATABASE_POOL_SIZE",
                source,
            })?,
            None => DEFAULT_POOL_SIZE,
        };
        if database_pool_size == 0 {
            return Err(ConfigError::Zero("DATABASE_POOL_SIZE"));
        }

        let server_host = var("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let server_port = match var("SERVER_PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|source| ConfigError::Invalid {
                name: "SERVER_PORT",
                source,
            })?,
            None => DEFAULT_PORT,
        };

        let log_config = var("LOG_CONFIG").unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_string());

        Ok(Config {
            database_url,
            database_ca_file,
            database_pool_size,
            server_host,
            server_port,
            log_config,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
