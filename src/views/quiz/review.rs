use maud::{html, Markup};

use crate::models::QuizQuestion;
use crate::names;
use crate::views::components;

/// Reveal state of one review cell. Deliberately independent per question:
/// revealing a cell never touches its siblings, and there is no aggregate
/// score here (that is the attempt flow's job).
pub enum RevealState {
    Hidden,
    Revealed {
        /// Index of the option the user guessed; `None` for the explicit
        /// "reveal without guessing" action.
        selected: Option<usize>,
    },
}

fn cell_dom_id(quiz_id: i64, index: usize) -> String {
    format!("review-{quiz_id}-{index}")
}

/// One question in reveal-on-demand mode. Hidden cells swap themselves for
/// the revealed rendering via htmx; revealed cells carry no htmx attributes
/// at all, which is what makes them inert.
pub fn review_cell(
    quiz_id: i64,
    index: usize,
    question: &QuizQuestion,
    state: RevealState,
) -> Markup {
    let dom_id = cell_dom_id(quiz_id, index);
    html! {
        article.review-cell id=(dom_id) {
            div.question-head {
                span.question-number { (index + 1) }
                h4 { (question.question) }
                (components::difficulty_badge(question))
            }

            @match state {
                RevealState::Hidden => {
                    div.option-list {
                        @for (option_idx, option) in question.options.iter().enumerate() {
                            button.option type="button"
                                   hx-get=(names::review_url(quiz_id, index, Some(option_idx)))
                                   hx-target=(format!("#{dom_id}"))
                                   hx-swap="outerHTML" {
                                span.option-marker {}
                                (option)
                            }
                        }
                    }
                    div.reveal-row {
                        button.reveal-link type="button"
                               hx-get=(names::review_url(quiz_id, index, None))
                               hx-target=(format!("#{dom_id}"))
                               hx-swap="outerHTML" {
                            "Reveal Answer"
                        }
                    }
                }
                RevealState::Revealed { selected } => {
                    @let selected_text = selected.and_then(|i| question.options.get(i));
                    @let guessed_right = selected_text == Some(&question.answer);
                    div.option-list {
                        @for option in &question.options {
                            @let is_answer = *option == question.answer;
                            @let is_selected = Some(option) == selected_text;
                            @let class = if is_answer {
                                "option option-correct"
                            } else if is_selected {
                                "option option-incorrect"
                            } else {
                                "option option-neutral"
                            };
                            div class=(class) {
                                span.option-marker {
                                    @if is_answer { "\u{2713}" }
                                    @else if is_selected { "\u{2715}" }
                                }
                                (option)
                            }
                        }
                    }
                    div.explanation-panel {
                        p.explanation-lead {
                            @if guessed_right {
                                "Excellent!"
                            } @else {
                                "Correct Answer: " (question.answer)
                            }
                        }
                        p.explanation { (question.explanation) }
                    }
                }
            }
        }
    }
}
