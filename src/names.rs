use ulid::Ulid;

pub const GENERATE_URL: &str = "/";
pub const GENERATE_QUIZ_URL: &str = "/generate-quiz";
pub const HISTORY_URL: &str = "/history";

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Shown when quiz generation fails without a usable `detail` message.
pub const GENERIC_ERROR_MESSAGE: &str =
    "An error occurred while generating the quiz. Please try again.";

/// Shown when the history fetch fails without a usable `detail` message.
pub const HISTORY_ERROR_MESSAGE: &str =
    "An error occurred while loading quiz history. Please try again.";

pub fn quiz_details_url(quiz_id: i64) -> String {
    format!("/history/{quiz_id}/details")
}

pub fn take_quiz_url(quiz_id: i64) -> String {
    format!("/history/{quiz_id}/take")
}

/// Reveal one review cell. `selected` is the index of the option the user
/// guessed; absent for the explicit no-guess reveal.
pub fn review_url(quiz_id: i64, question_idx: usize, selected: Option<usize>) -> String {
    match selected {
        Some(option_idx) => {
            format!("/history/{quiz_id}/review/{question_idx}?selected={option_idx}")
        }
        None => format!("/history/{quiz_id}/review/{question_idx}"),
    }
}

pub fn select_option_url(token: Ulid, question_idx: usize, option_idx: usize) -> String {
    format!("/attempt/{token}/select/{question_idx}?option={option_idx}")
}

pub fn submit_attempt_url(token: Ulid) -> String {
    format!("/attempt/{token}/submit")
}

pub fn retake_attempt_url(token: Ulid) -> String {
    format!("/attempt/{token}/retake")
}

pub fn abandon_attempt_url(token: Ulid) -> String {
    format!("/attempt/{token}/abandon")
}

pub fn wikipedia_topic_url(topic: &str) -> String {
    format!("https://en.wikipedia.org/wiki/{topic}")
}
