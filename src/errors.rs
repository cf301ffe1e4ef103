//! Unified application error type.
//! All modules (engine, view, cli, utils) return AppError to keep the error
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
    // Selection / identity
    // ---------------------------
    #[error("No timer is selected")]
    NoSelection,

    #[error("Selected timer no longer exists: {0}")]
    StaleIdentity(String),

    // ---------------------------
    // Engine-related
    // ---------------------------
    #[error("Timer engine error: {0}")]
    Engine(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid sort column: {0}")]
    InvalidSortColumn(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
