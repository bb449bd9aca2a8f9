//! Error types for clientele.
//!
//! This module provides a unified error type with explicit variants for
//! transport, service, local validation and input errors.

use std::fmt;
use thiserror::Error;

use crate::client::ValidationErrors;

/// The unified error type for clientele operations.
///
/// Every remote operation fails with either [`Error::Transport`] (no usable
/// response) or [`Error::Service`] (the backend answered with an error).
/// [`Error::Validation`] is produced locally and never reaches the network.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, timeout, undecodable body).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The backend responded with a non-success status.
    #[error("service error: {0}")]
    Service(#[from] ServiceError),

    /// Local form validation failed.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Input validation errors (invalid URL, ID or date format).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Returns the human-readable message a presentation layer should show.
    pub fn message(&self) -> String {
        match self {
            Error::Service(err) => err.message.clone(),
            Error::Transport(err) => err.to_string(),
            Error::Validation(errors) => errors.to_string(),
            Error::InvalidInput(err) => err.to_string(),
        }
    }

    /// Returns true if the failure happened before any response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// A success response carried a body that could not be decoded.
    #[error("could not decode response: {message}")]
    Decode { message: String },
}

/// A remote operation, used to pick the fallback error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
    ToggleStatus,
    Countries,
}

impl Operation {
    /// The message reported when the backend gives no `error` field.
    pub fn default_message(self) -> &'static str {
        match self {
            Operation::List => "An error occurred while listing clients.",
            Operation::Create => "An error occurred while adding the client.",
            Operation::Update => "An error occurred while updating the client.",
            Operation::Delete => "An error occurred while deleting the client.",
            Operation::ToggleStatus => "An error occurred while enabling/disabling the client.",
            Operation::Countries => "An error occurred while fetching countries.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::ToggleStatus => "toggle-status",
            Operation::Countries => "countries",
        };
        f.write_str(name)
    }
}

/// Errors reported by the backend in a non-success response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    /// The operation that failed.
    pub operation: Operation,
    /// HTTP status code.
    pub status: u16,
    /// Message from the `error` field of the body, or the operation default.
    pub message: String,
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed (HTTP {}): {}", self.operation, self.status, self.message)
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Create a service error, falling back to the operation's default
    /// message when the server supplied none.
    pub fn new(operation: Operation, status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| operation.default_message().to_string());
        Self {
            operation,
            status,
            message,
        }
    }

    /// Check if the backend reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid service URL format.
    #[error("invalid service URL '{value}': {reason}")]
    ServiceUrl { value: String, reason: String },

    /// Invalid client identifier.
    #[error("invalid client id '{value}': {reason}")]
    ClientId { value: String, reason: String },

    /// Invalid date text.
    #[error("invalid date '{value}': {reason}")]
    Date { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
