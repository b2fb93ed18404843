//! Error types
//!
//! The evaluator itself never fails. The only request-level error is a
//! missing candidate, detected before the evaluator runs.

use thiserror::Error;

use crate::verdict::Verdict;

pub const MISSING_BODY_MESSAGE: &str = "Nenhuma senha foi fornecida no corpo (body) da requisição.";
pub const MISSING_QUERY_MESSAGE: &str = "Nenhuma senha foi fornecida.";
pub const QUERY_USAGE_HINT: &str = "Use a URL assim: .../teste-senha?senha=sua_senha_aqui";

/// No usable candidate was supplied with the request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    #[error("Nenhuma senha foi fornecida no corpo (body) da requisição.")]
    MissingBodyCandidate,
    #[error("Nenhuma senha foi fornecida.")]
    MissingQueryCandidate,
}

impl RequestError {
    /// Messages reported to the client, in order.
    pub fn messages(&self) -> &'static [&'static str] {
        match self {
            RequestError::MissingBodyCandidate => &[MISSING_BODY_MESSAGE],
            RequestError::MissingQueryCandidate => &[MISSING_QUERY_MESSAGE, QUERY_USAGE_HINT],
        }
    }

    /// Invalid verdict carrying this error's messages.
    pub fn to_verdict(&self) -> Verdict {
        Verdict::from_errors(self.messages().iter().map(|m| m.to_string()).collect())
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        tracing::warn!(error = ?self, "request rejected: no candidate supplied");
        (axum::http::StatusCode::BAD_REQUEST, axum::Json(self.to_verdict())).into_response()
    }
}

/// Failures while starting or running the HTTP server.
#[cfg(feature = "server")]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] envy::Error),
    #[error("Host did not resolve to any address: {0}")]
    UnresolvedHost(String),
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
