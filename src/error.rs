// src/error.rs

//! Unified error handling for the city crawler.

use std::fmt;

use thiserror::Error;

/// Result type alias for crawler operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A page could not be fetched
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The index page could not be fetched; nothing can be assembled without it
    #[error("Failed to fetch index page {url}: {message}")]
    IndexFetch { url: String, message: String },

    /// A coordinate attribute did not hold a finite number
    #[error("Can't parse {axis} for {city:?} from {value:?}: {reason}")]
    Coordinate {
        city: String,
        axis: &'static str,
        value: String,
        reason: String,
    },
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a fetch error for a URL.
    pub fn fetch(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a fatal index fetch error.
    pub fn index_fetch(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::IndexFetch {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a coordinate parse error.
    pub fn coordinate(
        city: impl Into<String>,
        axis: &'static str,
        value: impl Into<String>,
        reason: impl fmt::Display,
    ) -> Self {
        Self::Coordinate {
            city: city.into(),
            axis,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
