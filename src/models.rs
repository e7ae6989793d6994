use std::collections::HashMap;

use serde::Deserialize;

/// One generated quiz plus its source-article metadata, exactly as returned
/// by the backend. Immutable once received; every piece of local UI state is
/// derived from it, never written back into it.
#[derive(Clone, Debug, Deserialize)]
pub struct QuizRecord {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub sections: Vec<String>,
    pub key_entities: HashMap<String, Vec<String>>,
    pub quiz: Vec<QuizQuestion>,
    /// Optional on the wire; older records may omit it entirely.
    #[serde(default)]
    pub related_topics: Vec<String>,
}

impl QuizRecord {
    /// Flattened count across all entity categories, for the badge only.
    pub fn entity_count(&self) -> usize {
        self.key_entities.values().map(Vec::len).sum()
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    /// Display order is the grading order; preserved exactly as received.
    pub options: Vec<String>,
    /// Graded by exact string equality against one of `options`.
    pub answer: String,
    pub explanation: String,
    pub difficulty: String,
}

impl QuizQuestion {
    /// CSS class for the difficulty badge. The difficulty set is open-ended:
    /// three labels get dedicated styling, everything else a neutral one.
    pub fn difficulty_class(&self) -> &'static str {
        match self.difficulty.to_lowercase().as_str() {
            "easy" => "difficulty-easy",
            "medium" => "difficulty-medium",
            "hard" => "difficulty-hard",
            _ => "difficulty-neutral",
        }
    }
}
