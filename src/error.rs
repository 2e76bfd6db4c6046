// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Deskmate
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Deskmate operations
#[derive(Error, Debug)]
pub enum DeskmateError {
    /// API-related errors
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Session errors
    #[error("Session error: {0}")]
    Session(String),

    /// Terminal UI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

/// API-specific error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network connectivity error
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid response from the backend
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// Backend returned an error status
    #[error("API error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Session not known to the backend
    #[error("Session not found: {0}")]
    SessionNotFound(String),
}

/// Result type alias for Deskmate operations
pub type Result<T> = std::result::Result<T, DeskmateError>;
