//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Caller input
    // ---------------------------
    #[error("Invalid {param}: {reason}")]
    InvalidInput {
        param: &'static str,
        reason: String,
    },

    // ---------------------------
    // The external store
    // ---------------------------
    #[error("Journal database unavailable: {0}")]
    StoreUnavailable(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn invalid_input(param: &'static str, reason: impl Into<String>) -> Self {
        AppError::InvalidInput {
            param,
            reason: reason.into(),
        }
    }
}

/// Any failure to open or query the store collapses to StoreUnavailable.
/// The store is externally owned; its absence or a schema mismatch is a
/// setup problem on the Day One side, not something this tool can repair.
impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
