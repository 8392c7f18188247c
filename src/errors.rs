//! Unified application error type.
//! Local failures only (I/O, config, storage, user input). Outcomes of API
//! calls travel as `ApiOutcome` and never become an `AppError`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // HTTP client
    // ---------------------------
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid page size: {0} (allowed: 10, 20, 50)")]
    InvalidPageSize(u32),

    #[error("Invalid page number: {0}")]
    InvalidPage(u32),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("Login rejected")]
    LoginRejected,

    // ---------------------------
    // Storage errors
    // ---------------------------
    #[error("Storage file is corrupted: {0}")]
    Storage(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Logging
    // ---------------------------
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

pub type AppResult<T> = Result<T, AppError>;
