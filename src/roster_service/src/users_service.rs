use axum::{
    Router,
    http::{HeaderValue, Method, request},
    middleware,
    routing::{get, post, put},
};
use roster_adapters::config::AllowedOrigins;
use roster_axum::{
    AccountApiError, AccountState, require_bearer,
    routes::{delete_account, login, profile, signup, update_account},
};
use roster_core::{AccountStore, AuditLog, AuthValidator, CredentialHasher, Identity, TokenIssuer};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The user account service: signup, login, partial update, delete and the
/// guarded profile endpoint, all mounted under `/users`.
pub struct UsersService {
    router: Router,
}

impl UsersService {
    /// Create the service from its collaborators.
    ///
    /// # Arguments
    /// * `state` - Store, audit log, hasher and token issuer shared by the routes
    /// * `validator` - Access guard applied to `GET /users/profile`
    ///
    /// # Note on Architecture
    /// Update and delete are reachable without a token; only the profile
    /// route sits behind the guard.
    pub fn new<S, A, H, T, V>(state: AccountState<S, A, H, T>, validator: V) -> Self
    where
        S: AccountStore,
        A: AuditLog,
        H: CredentialHasher,
        T: TokenIssuer,
        V: AuthValidator<Claims = Identity, RequestParts = request::Parts>,
        V::Error: Into<AccountApiError>,
    {
        let protected = Router::new()
            .route("/users/profile", get(profile))
            .route_layer(middleware::from_fn_with_state(
                validator,
                require_bearer::<V>,
            ));

        let router = Router::new()
            .route("/users/signup", post(signup::<S, A, H, T>))
            .route("/users/login", post(login::<S, A, H, T>))
            .route(
                "/users/{id}",
                put(update_account::<S, A, H, T>).delete(delete_account::<S, A, H, T>),
            )
            .with_state(state)
            .merge(protected);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([http::header::AUTHORIZATION, http::header::CONTENT_TYPE])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the service as a standalone server until the listener fails
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Users service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
