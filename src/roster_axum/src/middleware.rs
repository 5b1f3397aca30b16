use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use roster_core::{AuthValidator, Identity};

use crate::error::AccountApiError;

/// Guard for protected routes.
///
/// Validates the request's credential with `V` and, on success, attaches the
/// resulting [`Identity`] to the request extensions before running the
/// wrapped handler. On failure the handler is never invoked.
///
/// ```ignore
/// Router::new()
///     .route("/profile", get(profile))
///     .route_layer(middleware::from_fn_with_state(validator, require_bearer::<LocalJwtValidator>))
/// ```
#[tracing::instrument(name = "Access guard", skip_all)]
pub async fn require_bearer<V>(
    State(validator): State<V>,
    request: Request,
    next: Next,
) -> Result<Response, AccountApiError>
where
    V: AuthValidator<Claims = Identity, RequestParts = http::request::Parts>,
    V::Error: Into<AccountApiError>,
{
    let (parts, body) = request.into_parts();

    let identity = match validator.validate(&parts).await {
        Ok(identity) => identity,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected request at access guard");
            return Err(e.into());
        }
    };

    let mut request = Request::from_parts(parts, body);
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
