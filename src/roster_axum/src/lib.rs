//! Axum integration for the roster account service.
//!
//! Route handlers translate HTTP requests into `roster_application` use cases
//! and map their errors onto status codes. The bearer guard middleware
//! resolves an [`roster_core::Identity`] for protected routes.
//!
//! ```text
//! POST   /users/signup    -> signup          (201, {id, email})
//! POST   /users/login     -> login           ({accessToken})
//! PUT    /users/{id}      -> update_account  ({id, email, firstName, lastName})
//! DELETE /users/{id}      -> delete_account  ({id, email})
//! GET    /users/profile   -> profile         (guarded, {id, email, issuedAt, expiresAt})
//! ```

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{AccountApiError, ErrorResponse};
pub use middleware::require_bearer;
pub use state::AccountState;
