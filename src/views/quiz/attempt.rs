use maud::{html, Markup};
use ulid::Ulid;

use crate::attempt::Attempt;
use crate::models::QuizQuestion;
use crate::names;
use crate::views::components;

/// The whole attempt view: score/progress card, questions, submit footer.
/// Every option click and the submit re-render this fragment, so all derived
/// values (progress, answered count, score) are recomputed from the attempt
/// on each render.
pub fn attempt_page(token: Ulid, attempt: &Attempt) -> Markup {
    let total = attempt.total();
    let answered = attempt.answered_count();

    html! {
        div #attempt {
            button.back-link hx-post=(names::abandon_attempt_url(token))
                   hx-target="main"
                   hx-swap="innerHTML" {
                "\u{2190} Back to History"
            }

            article.score-card {
                div.progress-track {
                    div.progress-fill style=(format!("width: {}%", attempt.progress_percent())) {}
                }
                h2 { "Topic: " (attempt.record().title) }
                @if attempt.graded() {
                    p { "Quiz Completed!" }
                    div.score-bubble { (attempt.score()) " / " (total) }
                    p.score-tier { (attempt.tier().message()) }
                } @else {
                    p { "Question " ((answered + 1).min(total)) " of " (total) }
                }
            }

            div.question-list {
                @for (index, question) in attempt.record().quiz.iter().enumerate() {
                    (attempt_question(token, index, question, attempt))
                }
            }

            @if attempt.graded() {
                button.submit-btn hx-post=(names::retake_attempt_url(token))
                       hx-target="main"
                       hx-swap="innerHTML" {
                    "Retake Quiz"
                }
            } @else {
                button.submit-btn disabled[!attempt.all_answered()]
                       hx-post=(names::submit_attempt_url(token))
                       hx-target="#attempt"
                       hx-swap="outerHTML" {
                    @if attempt.all_answered() {
                        "Submit Quiz"
                    } @else {
                        "Answer all questions (" (answered) "/" (total) ")"
                    }
                }
            }
        }
    }
}

fn attempt_question(
    token: Ulid,
    index: usize,
    question: &QuizQuestion,
    attempt: &Attempt,
) -> Markup {
    let selected = attempt.selection(index);

    html! {
        article.attempt-question {
            div.question-head {
                span.question-number { (index + 1) }
                h4 { (question.question) }
                (components::difficulty_badge(question))
            }

            div.option-list {
                @for (option_idx, option) in question.options.iter().enumerate() {
                    @let is_selected = selected == Some(option.as_str());
                    @if attempt.graded() {
                        @let is_answer = *option == question.answer;
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
                    } @else {
                        button type="button"
                               class=(if is_selected { "option option-selected" } else { "option" })
                               hx-post=(names::select_option_url(token, index, option_idx))
                               hx-target="#attempt"
                               hx-swap="outerHTML" {
                            span.option-marker {}
                            (option)
                        }
                    }
                }
            }

            @if attempt.graded() {
                div.explanation-panel {
                    p.explanation {
                        strong { "Explanation: " }
                        (question.explanation)
                    }
                }
            }
        }
    }
}
