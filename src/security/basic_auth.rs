//! HTTP Basic Authentication gate.
//!
//! # Responsibilities
//! - Parse `Authorization: Basic <base64(user:pass)>`
//! - Check the pair against the credential set
//! - Reject with 401 + `WWW-Authenticate` challenge, or pass the request on
//!   with an [`AuthenticatedUser`] extension attached

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::credentials::Credentials;

/// Realm advertised when none is configured.
pub const DEFAULT_REALM: &str = "Authorization Required";

/// Username of the request's verified Basic credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

/// Basic-auth checker bound to one credential set and realm.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    credentials: Credentials,
    challenge: HeaderValue,
}

impl BasicAuth {
    /// Build a gate. A realm that cannot be carried in a header falls back
    /// to [`DEFAULT_REALM`].
    pub fn new(credentials: Credentials, realm: &str) -> Self {
        let challenge = HeaderValue::from_str(&format!("Basic realm=\"{realm}\""))
            .unwrap_or_else(|_| {
                tracing::warn!(realm, "Realm not usable in a header, using default");
                HeaderValue::from_static("Basic realm=\"Authorization Required\"")
            });

        Self { credentials, challenge }
    }

    /// Resolve the request's Basic credentials, if they are valid.
    pub fn authenticate(&self, headers: &HeaderMap) -> Option<AuthenticatedUser> {
        let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        let encoded = value.strip_prefix("Basic ")?;
        let decoded = STANDARD.decode(encoded).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        self.credentials
            .verify(username, password)
            .then(|| AuthenticatedUser(username.to_string()))
    }

    /// 401 response carrying the challenge header.
    pub fn challenge(&self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, self.challenge.clone())],
            Body::empty(),
        )
            .into_response()
    }
}

/// Middleware that only lets authenticated requests through.
pub async fn require_basic_auth(
    State(auth): State<BasicAuth>,
    mut request: Request,
    next: Next,
) -> Response {
    match auth.authenticate(request.headers()) {
        Some(user) => {
            tracing::debug!(user = %user.0, path = %request.uri().path(), "Basic auth accepted");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        None => {
            tracing::warn!(path = %request.uri().path(), "Basic auth rejected");
            auth.challenge()
        }
    }
}
