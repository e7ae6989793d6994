use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;

use crate::views;

/// Errors a handler can surface as a whole-page response. Backend failures
/// the user can retry are rendered inline by the owning view instead and
/// never reach this type.
#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    Input(&'static str),
    NotFound(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, m),
            AppError::Input(m) => (StatusCode::BAD_REQUEST, m),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, m),
        };
        let page = views::page(
            "Error",
            html! {
                h1 { (code.as_u16()) }
                p { (message) }
            },
        );
        (code, page).into_response()
    }
}

/// Log-and-convert helper for handler call sites.
pub trait ResultExt<T> {
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }
}
