use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Supabase,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "supabase" => Ok(StoreBackend::Supabase),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub run_migrations: bool,
    pub supabase_url: Option<String>,
    pub supabase_key: Option<String>,
    pub supabase_timeout_secs: u64,
    /// `["*"]` allows every origin.
    pub cors_allowed_origins: Vec<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = non_empty(lookup("DATABASE_URL"));
        let supabase_url = non_empty(lookup("SUPABASE_URL"));
        let supabase_key = non_empty(lookup("SUPABASE_KEY"));

        let store_backend = match non_empty(lookup("STORE_BACKEND")) {
            Some(raw) => raw
                .parse::<StoreBackend>()
                .map_err(|e| Error::Config(format!("Invalid value for STORE_BACKEND: {}", e)))?,
            None if supabase_url.is_some() => StoreBackend::Supabase,
            None if database_url.is_some() => StoreBackend::Postgres,
            None => {
                return Err(Error::Config(
                    "Missing environment variable: set SUPABASE_URL, DATABASE_URL or STORE_BACKEND"
                        .to_string(),
                ))
            }
        };

        match store_backend {
            StoreBackend::Postgres if database_url.is_none() => {
                return Err(missing("DATABASE_URL"));
            }
            StoreBackend::Supabase if supabase_url.is_none() => {
                return Err(missing("SUPABASE_URL"));
            }
            StoreBackend::Supabase if supabase_key.is_none() => {
                return Err(missing("SUPABASE_KEY"));
            }
            _ => {}
        }

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(Self {
            server_address: lookup("SERVER_ADDRESS").unwrap_or_else(|| "0.0.0.0:8000".to_string()),
            store_backend,
            database_url,
            database_max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
            supabase_url,
            supabase_key,
            supabase_timeout_secs: parse_or(&lookup, "SUPABASE_TIMEOUT_SECS", 10)?,
            cors_allowed_origins,
        })
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|o| o == "*")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn missing(name: &str) -> Error {
    Error::Config(format!("Missing environment variable: {}", name))
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match non_empty(lookup(name)) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
