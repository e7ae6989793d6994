use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Extracts whether the request is an HTMX request by checking the
/// `HX-Request` header. HTMX requests get the `main` fragment only; plain
/// navigation gets the full page.
pub struct IsHtmx(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for IsHtmx {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");
        Ok(IsHtmx(is_htmx))
    }
}
