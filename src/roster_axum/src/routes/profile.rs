use axum::{Extension, Json};
use roster_core::Identity;

/// Returns the identity the access guard resolved for this request.
///
/// Must be mounted behind [`crate::middleware::require_bearer`].
#[tracing::instrument(name = "Profile", skip_all)]
pub async fn profile(Extension(identity): Extension<Identity>) -> Json<Identity> {
    Json(identity)
}
