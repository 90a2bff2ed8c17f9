//! Bearer-token authentication for the employee routes.

use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;
use tracing::warn;

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Rejects requests whose `Authorization` header does not carry the
/// configured bearer token. Passes everything through when no token is set.
pub(crate) async fn require_api_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.api_token() else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    if provided.is_some_and(|token| token_matches(token, expected)) {
        return next.run(request).await;
    }

    warn!(
        method = %request.method(),
        uri = %request.uri(),
        token_present = provided.is_some(),
        "Rejected unauthenticated request"
    );
    ApiErrorResponse::new(StatusCode::UNAUTHORIZED, ApiError::unauthorized()).into_response()
}

/// Compares tokens without short-circuiting on the first differing byte.
fn token_matches(provided: &str, expected: &str) -> bool {
    provided.as_bytes().ct_eq(expected.as_bytes()).into()
}
