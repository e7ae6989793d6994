use maud::{html, Markup};

use crate::models::QuizQuestion;

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

pub fn error_banner(message: &str) -> Markup {
    html! {
        div.error-banner role="alert" {
            span.error-icon { "\u{26A0}" }
            span { (message) }
        }
    }
}

pub fn difficulty_badge(question: &QuizQuestion) -> Markup {
    html! {
        span class=(format!("difficulty-badge {}", question.difficulty_class())) {
            (question.difficulty)
        }
    }
}
