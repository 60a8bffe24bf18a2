//! Configuration management for the contact book.
//!
//! This module loads settings from environment variables, reading a `.env`
//! file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use crate::storage::StorageFormat;
use std::env;
use std::path::PathBuf;

/// Default book file when `CONTACT_BOOK_PATH` is unset.
pub const DEFAULT_BOOK_PATH: &str = "address_book.bin";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the book is saved and loaded (default: "address_book.bin")
    pub book_path: PathBuf,

    /// On-disk format (default: derived from the book path's extension)
    pub storage_format: StorageFormat,

    /// Records per page when listing (default: 5)
    pub page_size: usize,

    /// How far ahead upcoming birthdays are reported, in days (default: 7)
    pub birthday_window_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Book file path (default: "address_book.bin")
    /// - `CONTACT_BOOK_FORMAT`: "binary" or "json" (default: from the path)
    /// - `CONTACT_BOOK_PAGE_SIZE`: Records per page, at least 1 (default: 5)
    /// - `CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS`: Upcoming birthday window (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let book_path = env::var("CONTACT_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BOOK_PATH));

        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let storage_format = match env::var("CONTACT_BOOK_FORMAT") {
            Ok(val) => val
                .parse::<StorageFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FORMAT".to_string(),
                    reason,
                })?,
            Err(_) => StorageFormat::from_path(&book_path),
        };

        let page_size = Self::parse_env_usize("CONTACT_BOOK_PAGE_SIZE", 5)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let birthday_window_days = Self::parse_env_i64("CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS", 7)?;
        if !(0..=366).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 0 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            storage_format,
            page_size,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            storage_format: StorageFormat::Binary,
            page_size: 5,
            birthday_window_days: 7,
            log_level: "error".to_string(),
        }
    }
}
