use maud::{html, Markup};

use crate::models::QuizRecord;
use crate::names;
use crate::views::quiz::review::{review_cell, RevealState};

/// Read-only view of one record: article card, review cells, related topics.
/// Used in the generation result and the history details overlay.
pub fn quiz_display(record: &QuizRecord) -> Markup {
    html! {
        article.article-card {
            p.source-line {
                a href=(record.url) target="_blank" rel="noopener noreferrer" {
                    (record.url)
                }
            }
            h2 { (record.title) }
            p { (record.summary) }
            div.badge-row {
                span."pill pill-sections" { (record.sections.len()) " Sections" }
                span."pill pill-entities" { (record.entity_count()) " Entities Extracted" }
            }
        }

        div.quiz-heading {
            h3 { "Generated Quiz" }
            span."pill pill-count" { (record.quiz.len()) " Questions" }
        }

        div.question-list {
            @for (index, question) in record.quiz.iter().enumerate() {
                (review_cell(record.id, index, question, RevealState::Hidden))
            }
        }

        @if !record.related_topics.is_empty() {
            article.related-topics {
                h3 { "Suggested Topics for Further Reading" }
                div.topic-chips {
                    @for topic in &record.related_topics {
                        a.topic-chip href=(names::wikipedia_topic_url(topic))
                                     target="_blank" rel="noopener noreferrer" {
                            (topic)
                        }
                    }
                }
            }
        }
    }
}
