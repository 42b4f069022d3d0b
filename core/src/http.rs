//! HTTP exchange types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. The core builds `HttpRequest`
//! values and parses `HttpResponse` values without ever touching the network;
//! whoever hosts the core (the CLI, a test harness) executes the actual
//! round trip. That keeps the library deterministic and lets tests feed it
//! canned responses with no server in sight.
//!
//! All fields are owned (`String`, `Vec`) so values can be moved freely
//! between the core and its host.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Wire-format method name, for executors and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `UserClient::build_*` methods. `path` is the full URL. The host
/// executes the request and hands the resulting `HttpResponse` back to the
/// matching `parse_*` method.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the host after executing an `HttpRequest`. A value of this
/// type means the exchange completed; transport-level failures are reported
/// as `ApiError::Transport` instead.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
