//! Core of the user-management screen: REST gateway plus list editor.
//!
//! # Overview
//! `UserClient` translates the five logical operations (list, fetch, create,
//! update, delete) into `HttpRequest` values and decodes `HttpResponse`
//! values, without touching the network (host-does-IO pattern). `UserEditor`
//! sits on top: it owns the in-memory list and the form draft, decides
//! between create and update, applies server results back onto the list, and
//! asks for confirmation before deletes.
//!
//! # Design
//! - `UserClient` is stateless; it holds only `base_url`. Each operation is
//!   a `build_*`/`parse_*` pair, so the I/O boundary is explicit.
//! - `UserEditor` takes the transport as an injected capability
//!   (`FnOnce(HttpRequest) -> Result<HttpResponse, ApiError>`); tests drive
//!   it with canned closures, the CLI with a real HTTP executor.
//! - State mutations happen only after a successful round trip. Failures are
//!   logged through `tracing` and leave the editor untouched.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod editor;
pub mod error;
pub mod http;
pub mod theme;
pub mod types;

pub use client::UserClient;
pub use editor::{EditorMode, UserEditor};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use theme::{avatar_icon, card_gradient};
pub use types::{User, UserDraft};
