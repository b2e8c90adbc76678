//! Request-scoped layers: request ids, bearer auth, and the shared rate limit.
//!
//! Rejections use the same `{error, meta}` envelope as the route handlers, so
//! `request_id` must run outside the other two layers.

use std::{
    collections::HashSet,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::ApiError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id, taken from `x-request-id` or freshly generated.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    fn of(req: &Request) -> String {
        req.extensions()
            .get::<Self>()
            .map(|id| id.0.clone())
            .unwrap_or_default()
    }
}

/// Bearer tokens accepted on the product routes.
///
/// An empty token set means auth is off.
#[derive(Debug, Clone)]
pub struct AuthState {
    tokens: Arc<HashSet<String>>,
}

impl AuthState {
    /// Builds auth from the configured key list.
    ///
    /// # Errors
    ///
    /// Fails outside development when `keys` is empty.
    pub fn from_keys(keys: &[String], is_development: bool) -> anyhow::Result<Self> {
        if keys.is_empty() {
            if !is_development {
                anyhow::bail!(
                    "PROMOS_API_KEYS is required outside development; provide comma-separated bearer tokens"
                );
            }
            tracing::warn!("PROMOS_API_KEYS not set; bearer auth disabled in development");
        }

        Ok(Self {
            tokens: Arc::new(keys.iter().cloned().collect()),
        })
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.tokens.is_empty()
    }

    fn authorizes(&self, headers: &HeaderMap) -> bool {
        bearer_token(headers.get(AUTHORIZATION)).is_some_and(|t| self.tokens.contains(t))
    }
}

#[derive(Debug)]
struct Window {
    opened_at: Instant,
    used: usize,
}

/// Fixed-window limiter shared by every protected route.
#[derive(Debug, Clone)]
pub struct RateLimitState {
    max_requests: usize,
    window: Duration,
    current: Arc<Mutex<Window>>,
}

impl RateLimitState {
    #[must_use]
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            current: Arc::new(Mutex::new(Window {
                opened_at: Instant::now(),
                used: 0,
            })),
        }
    }

    /// Takes one slot from the current window, opening a new one if it expired.
    async fn try_acquire(&self) -> bool {
        let mut current = self.current.lock().await;
        if current.opened_at.elapsed() >= self.window {
            current.opened_at = Instant::now();
            current.used = 0;
        }
        if current.used >= self.max_requests {
            return false;
        }
        current.used += 1;
        true
    }
}

/// Stores a [`RequestId`] extension and echoes it as `x-request-id`.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), ToOwned::to_owned);

    req.extensions_mut().insert(RequestId(id.clone()));
    let mut res = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    res
}

/// Rejects requests without an accepted bearer token with `401 unauthorized`.
pub async fn require_bearer_auth(
    State(auth): State<AuthState>,
    req: Request,
    next: Next,
) -> Response {
    if !auth.is_enabled() || auth.authorizes(req.headers()) {
        return next.run(req).await;
    }

    ApiError::new(
        RequestId::of(&req),
        "unauthorized",
        "missing or invalid bearer token",
    )
    .into_response()
}

/// Rejects requests over the window budget with `429 rate_limited`.
pub async fn enforce_rate_limit(
    State(rate_limit): State<RateLimitState>,
    req: Request,
    next: Next,
) -> Response {
    if rate_limit.try_acquire().await {
        return next.run(req).await;
    }

    let req_id = RequestId::of(&req);
    tracing::warn!(
        request_id = %req_id,
        max_requests = rate_limit.max_requests,
        "rate limit exceeded"
    );
    ApiError::new(req_id, "rate_limited", "rate limit exceeded").into_response()
}

fn bearer_token(value: Option<&HeaderValue>) -> Option<&str> {
    value
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
