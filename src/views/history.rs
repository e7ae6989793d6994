use maud::{html, Markup, PreEscaped};

use crate::models::QuizRecord;
use crate::names;
use crate::views::components;
use crate::views::quiz as quiz_views;

/// The history tab: table of past generations, or the empty state. The
/// `#quiz-modal-slot` div is where the details overlay is swapped in.
pub fn history_page(records: &[QuizRecord]) -> Markup {
    html! {
        div.history-head {
            h2 { "Past Quizzes" }
            button.refresh-link hx-get=(names::HISTORY_URL)
                   hx-target="main"
                   hx-swap="innerHTML"
                   hx-indicator="#history-spinner" {
                "\u{21BB} Refresh"
            }
            span #history-spinner .htmx-indicator aria-busy="true" { "Loading history..." }
        }

        @if records.is_empty() {
            article.empty-state {
                span.empty-icon { "\u{1F4DA}" }
                h3 { "No Quizzes Generated Yet" }
                p { "Generate your first quiz from the \"Generate Quiz\" tab to see it listed here." }
            }
        } @else {
            article.history-card {
                table {
                    thead {
                        tr {
                            th { "ID" }
                            th { "Title" }
                            th { "Questions" }
                            th.actions { "Actions" }
                        }
                    }
                    tbody {
                        @for record in records {
                            (history_row(record))
                        }
                    }
                }
            }
        }

        div #quiz-modal-slot {}
    }
}

fn history_row(record: &QuizRecord) -> Markup {
    html! {
        tr {
            td."record-id" { "#" (record.id) }
            td {
                div.record-title { (record.title) }
                a.record-url href=(record.url) target="_blank" rel="noopener noreferrer" {
                    (crate::utils::truncate(&record.url, 60))
                }
            }
            td {
                span."pill pill-count" { (record.quiz.len()) " Qs" }
            }
            td.actions {
                button.view-btn hx-get=(names::quiz_details_url(record.id))
                       hx-target="#quiz-modal-slot"
                       hx-swap="innerHTML" {
                    "View Details"
                }
                button.take-btn hx-post=(names::take_quiz_url(record.id))
                       hx-target="main"
                       hx-swap="innerHTML" {
                    "Take Quiz"
                }
            }
        }
    }
}

/// Fetch failure state: one retryable message, nothing partial.
pub fn history_error(message: &str) -> Markup {
    html! {
        div.history-head {
            h2 { "Past Quizzes" }
            button.refresh-link hx-get=(names::HISTORY_URL)
                   hx-target="main"
                   hx-swap="innerHTML" {
                "\u{21BB} Retry"
            }
        }
        (components::error_banner(message))
    }
}

/// Details overlay for one record. Rendered into `#quiz-modal-slot` and
/// opened as a native modal dialog, which provides the backdrop and the
/// escape-close behavior; closing removes the dialog from the document, so
/// reopening starts from a clean slate.
pub fn details_modal(record: &QuizRecord) -> Markup {
    html! {
        dialog #quiz-details {
            article.modal-card {
                header {
                    h2 { "Quiz Details" }
                    button.close-btn aria-label="Close"
                           onclick="document.getElementById('quiz-details').close()" {
                        "\u{2715}"
                    }
                }
                div.modal-body {
                    (quiz_views::quiz_display(record))
                }
            }
        }
        script {
            (PreEscaped(r#"(function(){var d=document.getElementById('quiz-details');d.showModal();d.addEventListener('click',function(e){if(e.target===d)d.close();});d.addEventListener('close',function(){d.remove();});})();"#))
        }
    }
}
