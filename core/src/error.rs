//! Error types for the users API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the user does not exist" from "the server returned an unexpected status."
//! All other non-2xx responses land in `Http` with the raw status code and
//! body for debugging. `Transport` covers failures where no response was
//! obtained at all (connection refused, DNS, timeout); the transport reports
//! them and the client passes them through unwrapped.

use thiserror::Error;

/// Errors surfaced by `UserClient` and the transport capability.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404. The requested user does not exist.
    #[error("user not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed. Network unreachable, refused, timed out.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Decode(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Encode(String),
}
