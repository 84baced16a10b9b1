//! # API Configuration Module
//!
//! Loads configuration for the availability API server from environment
//! variables, with defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `WORKING_HOURS_START`: First bookable hour (default: 8)
//! - `WORKING_HOURS_END`: Exclusive end hour (default: 18)
//! - `BUSINESS_DAYS`: Comma-separated weekdays (default: "mon,tue,wed,thu,fri")

use availability_core::working_hours::WorkingHours;
use chrono::Weekday;
use eyre::{eyre, Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the availability API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Window in which availability may be added
    pub working_hours: WorkingHours,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - The working hours settings are not numbers, name unknown weekdays,
    ///   or describe an empty window
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        let working_hours = working_hours_from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            working_hours,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn working_hours_from_lookup<F>(lookup: &F) -> Result<WorkingHours>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = WorkingHours::default();

    let start_hour = match lookup("WORKING_HOURS_START") {
        Some(value) => value.trim().parse().wrap_err("Invalid WORKING_HOURS_START value")?,
        None => defaults.start_hour(),
    };
    let end_hour = match lookup("WORKING_HOURS_END") {
        Some(value) => value.trim().parse().wrap_err("Invalid WORKING_HOURS_END value")?,
        None => defaults.end_hour(),
    };
    let business_days = match lookup("BUSINESS_DAYS") {
        Some(value) => value
            .split(',')
            .map(str::trim)
            .filter(|day| !day.is_empty())
            .map(|day| {
                day.parse::<Weekday>()
                    .map_err(|_| eyre!("Invalid weekday in BUSINESS_DAYS: {}", day))
            })
            .collect::<Result<Vec<_>>>()?,
        None => defaults.business_days().to_vec(),
    };

    WorkingHours::new(start_hour, end_hour, business_days)
        .wrap_err("Invalid working hours configuration")
}
