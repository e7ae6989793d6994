use axum::{
    extract::{Form, State},
    routing::{get, post},
    Router,
};
use maud::Markup;
use serde::Deserialize;

use crate::{extractors::IsHtmx, names, views, AppState};

use crate::views::generate::{self as generate_views, GenerateFormState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::GENERATE_URL, get(generate_page))
        .route(names::GENERATE_QUIZ_URL, post(generate_quiz))
}

/// Deserialize an HTML checkbox value. Checked boxes arrive as a string
/// ("true" here, "on" for plain forms); unchecked ones are absent entirely.
fn deserialize_checkbox<'de, D: serde::Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    struct Vis;
    impl serde::de::Visitor<'_> for Vis {
        type Value = bool;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("bool or checkbox string")
        }
        fn visit_bool<E: serde::de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<bool, E> {
            Ok(matches!(v, "true" | "on" | "1"))
        }
    }
    d.deserialize_any(Vis)
}

#[derive(Deserialize)]
struct GenerateForm {
    url: String,
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    force_refresh: bool,
}

async fn generate_page(IsHtmx(is_htmx): IsHtmx) -> Markup {
    views::render(
        is_htmx,
        "Generate Quiz",
        generate_views::generate_page(GenerateFormState::default()),
    )
}

/// Submit the URL to the backend. Success replaces the form with the quiz
/// display; failure re-renders the form with the error message and keeps the
/// entered URL. The failed attempt retains no partial record.
async fn generate_quiz(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Form(form): Form<GenerateForm>,
) -> Markup {
    if form.force_refresh {
        // The backend is about to regenerate; anything cached here is stale.
        state.records.invalidate();
    }
    let generation = state.records.generation();

    match state.backend.generate_quiz(&form.url, form.force_refresh).await {
        Ok(record) => {
            tracing::info!("generated quiz {} for {}", record.id, form.url);
            state.records.store(generation, [record.clone()]);
            views::render(is_htmx, &record.title, generate_views::generate_result(&record))
        }
        Err(e) => {
            tracing::warn!("quiz generation for {} failed: {e}", form.url);
            views::render(
                is_htmx,
                "Generate Quiz",
                generate_views::generate_page(GenerateFormState {
                    url: &form.url,
                    error: Some(e.user_message(names::GENERIC_ERROR_MESSAGE)),
                }),
            )
        }
    }
}
