//! Error types for the Majestea API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers distinguish "no such
//! menu category / reservation" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging. `Transport` is never produced by the
//! core itself; it is the variant hosts use when the round-trip fails before
//! any response arrives.

use thiserror::Error;

use crate::validate::ValidationError;

/// Errors returned by `MajesteaClient` methods and by host transports.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The response decoded but breaks a data-model invariant.
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] ValidationError),

    /// The request never produced a response (connection refused, bad URL, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}
