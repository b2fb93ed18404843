use axum::{
    body::Bytes,
    extract::RawQuery,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::SecretString;
use serde_json::Value;

use crate::error::RequestError;
use crate::evaluator::evaluate;
use crate::verdict::Verdict;

pub const BANNER: &str = "Missão 9 - O Validador de Senhas - API no ar!";

/// Service banner.
///
/// # Endpoint
/// `GET /`
pub async fn index() -> &'static str {
    BANNER
}

/// Checks the candidate sent in the JSON body field `senha`.
///
/// Returns 200 when every rule passes, 400 otherwise. A missing, empty or
/// non-string `senha` (or a body that is not JSON) is reported as a missing
/// candidate without running the rules.
///
/// # Endpoint
/// `POST /validar-senha`
pub async fn validate_body(body: Bytes) -> Result<Response, RequestError> {
    let candidate = candidate_from_body(&body).ok_or(RequestError::MissingBodyCandidate)?;
    Ok(verdict_response(evaluate(&candidate)))
}

/// Checks the candidate sent in the `senha` query parameter.
///
/// An absent or empty parameter is reported as a missing candidate, and so
/// is a repeated `senha` key or a value whose percent-encoding does not
/// decode to valid UTF-8.
///
/// # Endpoint
/// `GET /teste-senha?senha=...`
pub async fn validate_query(RawQuery(query): RawQuery) -> Result<Response, RequestError> {
    let candidate = query
        .as_deref()
        .and_then(candidate_from_query)
        .ok_or(RequestError::MissingQueryCandidate)?;
    Ok(verdict_response(evaluate(&candidate)))
}

fn candidate_from_query(query: &str) -> Option<SecretString> {
    let mut values = query
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (form_decode(key)? == "senha").then_some(value)
        });

    let raw = values.next()?;
    if values.next().is_some() {
        return None;
    }

    let senha = form_decode(raw)?;
    if senha.is_empty() {
        return None;
    }
    Some(SecretString::new(senha.into_boxed_str()))
}

/// Decodes one `application/x-www-form-urlencoded` component.
///
/// `None` when the decoded bytes are not valid UTF-8.
fn form_decode(component: &str) -> Option<String> {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}

fn candidate_from_body(body: &[u8]) -> Option<SecretString> {
    let payload: Value = serde_json::from_slice(body).ok()?;
    let senha = payload.get("senha")?.as_str()?;
    if senha.is_empty() {
        return None;
    }
    Some(SecretString::new(senha.into()))
}

fn verdict_response(verdict: Verdict) -> Response {
    let status = if verdict.is_valid() {
        StatusCode::OK
    } else {
        tracing::debug!(failed_rules = verdict.errors.len(), "password rejected");
        StatusCode::BAD_REQUEST
    };
    (status, Json(verdict)).into_response()
}
