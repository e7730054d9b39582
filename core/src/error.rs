//! Error types for loading the todo list.
//!
//! # Design
//! The view treats every variant as the same "load failure" and shows the
//! `Display` output verbatim. `Status` therefore carries a fixed,
//! user-facing message; the status code is kept for logging only.

/// Failures while loading the todo list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("Error al cargar los TODOs")]
    Status { status: u16 },

    /// The host could not complete the round-trip (DNS, connect, TLS, ...).
    #[error("{0}")]
    Transport(String),

    /// The response body was not a JSON array of todos.
    #[error("{0}")]
    Deserialization(String),
}
