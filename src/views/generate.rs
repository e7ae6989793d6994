use maud::{html, Markup};

use crate::models::QuizRecord;
use crate::names;
use crate::views::components;
use crate::views::quiz as quiz_views;

pub struct GenerateFormState<'a> {
    pub url: &'a str,
    pub error: Option<&'a str>,
}

impl Default for GenerateFormState<'_> {
    fn default() -> Self {
        Self {
            url: "",
            error: None,
        }
    }
}

/// The URL form. On failure it is re-rendered with the error banner and the
/// entered URL retained, so the user can resubmit without retyping.
pub fn generate_page(state: GenerateFormState) -> Markup {
    html! {
        article.generate-card {
            hgroup {
                h1 { "Generate Quiz from Wikipedia" }
                p { "Paste a Wikipedia article URL below to generate an AI-powered quiz instantly." }
            }

            form hx-post=(names::GENERATE_QUIZ_URL)
                 hx-target="main"
                 hx-swap="innerHTML"
                 hx-disabled-elt="find button" {
                label {
                    "Article URL"
                    input type="url"
                          name="url"
                          value=(state.url)
                          placeholder="https://en.wikipedia.org/wiki/Alan_Turing"
                          required;
                }
                label.refresh-toggle {
                    input type="checkbox" name="force_refresh" value="true";
                    "Regenerate (ignore cache - costs quota)"
                }
                button type="submit" {
                    span.label-idle { "Generate Quiz" }
                    span.label-busy aria-busy="true" { "Scraping article & generating quiz..." }
                }
            }

            @if let Some(message) = state.error {
                (components::error_banner(message))
            }
        }
    }
}

pub fn generate_result(record: &QuizRecord) -> Markup {
    html! {
        (quiz_views::quiz_display(record))

        div.generate-again {
            (components::nav_link(names::GENERATE_URL, html! { "Generate Another Quiz" }))
        }
    }
}
