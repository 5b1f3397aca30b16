use async_trait::async_trait;

/// Trait for validating access tokens in middleware.
///
/// A validator extracts the credential from an inbound request, verifies it
/// and produces the claims that protected handlers read.
///
/// The validator receives `RequestParts` (headers, method, URI, extensions)
/// rather than the full request to avoid issues with non-`Sync` bodies.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// The identity extracted from a valid token. Inserted into request
    /// extensions for the wrapped handler.
    type Claims: Clone + Send + Sync + 'static;

    /// Typically `http::request::Parts`.
    type RequestParts;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Validate the credential carried by the request parts.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No credential is present
    /// - The credential is malformed, tampered with or expired
    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error>;
}
