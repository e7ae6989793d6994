//! The attempt state machine: one user's pass through a quiz, from
//! "answering" to "graded".
//!
//! An [`Attempt`] owns all state derived from its [`QuizRecord`] and never
//! mutates the record itself. Grading is one-way for the lifetime of the
//! attempt; a retake means constructing a brand-new `Attempt`.

use std::collections::HashMap;

use crate::models::QuizRecord;

#[derive(Debug)]
pub struct Attempt {
    record: QuizRecord,
    /// Question index to chosen option text. Entries appear only through
    /// user action; valid keys are exactly `0..record.quiz.len()`.
    selections: HashMap<usize, String>,
    graded: bool,
    score: usize,
}

impl Attempt {
    /// Start a fresh attempt over `record`.
    ///
    /// A record with zero questions has no reachable "all answered" state,
    /// so it is treated as immediately complete with a score of 0/0.
    pub fn new(record: QuizRecord) -> Self {
        let graded = record.quiz.is_empty();
        Self {
            record,
            selections: HashMap::new(),
            graded,
            score: 0,
        }
    }

    pub fn record(&self) -> &QuizRecord {
        &self.record
    }

    /// Give the record back, e.g. to seed a fresh attempt on retake.
    pub fn into_record(self) -> QuizRecord {
        self.record
    }

    pub fn total(&self) -> usize {
        self.record.quiz.len()
    }

    pub fn graded(&self) -> bool {
        self.graded
    }

    /// Valid only once graded; 0 before.
    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selection(&self, index: usize) -> Option<&str> {
        self.selections.get(&index).map(String::as_str)
    }

    /// Record (or overwrite) the chosen option for one question. Ignored
    /// once graded, and for indices outside the question range.
    pub fn select(&mut self, index: usize, option: String) {
        if self.graded || index >= self.total() {
            return;
        }
        self.selections.insert(index, option);
    }

    pub fn answered_count(&self) -> usize {
        self.selections.len()
    }

    pub fn all_answered(&self) -> bool {
        self.total() > 0 && self.answered_count() == self.total()
    }

    /// Grade the attempt: count the indices whose selection is exactly equal
    /// to the question's answer (case-sensitive, no trimming). Permitted only
    /// when every question has a selection; returns whether grading happened.
    /// Once graded the attempt stays graded.
    pub fn submit(&mut self) -> bool {
        if self.graded || !self.all_answered() {
            return false;
        }
        self.score = self
            .record
            .quiz
            .iter()
            .enumerate()
            .filter(|(idx, question)| self.selection(*idx) == Some(question.answer.as_str()))
            .count();
        self.graded = true;
        true
    }

    /// Whole percent of questions answered, rounded down. 0 for an empty
    /// quiz rather than a division by zero.
    pub fn progress_percent(&self) -> usize {
        if self.total() == 0 {
            0
        } else {
            self.answered_count() * 100 / self.total()
        }
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_score(self.score, self.total())
    }
}

/// Qualitative message bucket for a graded score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    Perfect,
    Good,
    KeepLearning,
}

impl ScoreTier {
    /// A perfect score is top-tier, strictly more than half is mid-tier and
    /// everything else (exactly half included) is low-tier. An empty quiz
    /// lands in the low tier.
    pub fn for_score(score: usize, total: usize) -> Self {
        if total > 0 && score == total {
            ScoreTier::Perfect
        } else if 2 * score > total {
            ScoreTier::Good
        } else {
            ScoreTier::KeepLearning
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Perfect => "Perfect Score! \u{1F389}",
            ScoreTier::Good => "Good Job! \u{1F44D}",
            ScoreTier::KeepLearning => "Keep Learning! \u{1F4DA}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuizQuestion;

    fn question(prompt: &str, options: &[&str], answer: &str) -> QuizQuestion {
        QuizQuestion {
            question: prompt.to_string(),
            options: options.iter().map(ToString::to_string).collect(),
            answer: answer.to_string(),
            explanation: format!("Because {answer}."),
            difficulty: "medium".to_string(),
        }
    }

    fn record(questions: Vec<QuizQuestion>) -> QuizRecord {
        QuizRecord {
            id: 7,
            url: "https://en.wikipedia.org/wiki/Alan_Turing".to_string(),
            title: "Alan Turing".to_string(),
            summary: "A mathematician.".to_string(),
            sections: vec![],
            key_entities: Default::default(),
            quiz: questions,
            related_topics: vec![],
        }
    }

    fn three_question_attempt() -> Attempt {
        Attempt::new(record(vec![
            question("Q1", &["A", "B"], "A"),
            question("Q2", &["B", "X"], "X"),
            question("Q3", &["C", "D"], "C"),
        ]))
    }

    #[test]
    fn submit_is_permitted_only_once_every_question_is_answered() {
        let mut attempt = three_question_attempt();
        assert!(!attempt.all_answered());
        assert!(!attempt.submit());
        assert!(!attempt.graded());

        attempt.select(0, "A".to_string());
        attempt.select(1, "B".to_string());
        assert!(!attempt.all_answered());
        assert!(!attempt.submit());

        attempt.select(2, "C".to_string());
        assert!(attempt.all_answered());
        assert!(attempt.submit());
        assert!(attempt.graded());
    }

    #[test]
    fn score_counts_exact_string_matches_per_index() {
        let mut attempt = three_question_attempt();
        attempt.select(0, "A".to_string());
        attempt.select(1, "B".to_string());
        attempt.select(2, "C".to_string());
        attempt.submit();
        assert_eq!(attempt.score(), 2);
        assert_eq!(attempt.tier(), ScoreTier::Good);
    }

    #[test]
    fn grading_is_case_sensitive_with_no_trimming() {
        let mut attempt = Attempt::new(record(vec![question("Q1", &["a", "A "], "A")]));
        attempt.select(0, "a".to_string());
        attempt.submit();
        assert_eq!(attempt.score(), 0);
    }

    #[test]
    fn selections_may_be_overwritten_before_grading() {
        let mut attempt = three_question_attempt();
        attempt.select(0, "B".to_string());
        attempt.select(0, "A".to_string());
        assert_eq!(attempt.selection(0), Some("A"));
        assert_eq!(attempt.answered_count(), 1);
    }

    #[test]
    fn select_after_grading_has_no_observable_effect() {
        let mut attempt = three_question_attempt();
        attempt.select(0, "A".to_string());
        attempt.select(1, "X".to_string());
        attempt.select(2, "C".to_string());
        attempt.submit();
        assert_eq!(attempt.score(), 3);

        attempt.select(0, "B".to_string());
        assert_eq!(attempt.selection(0), Some("A"));
        assert_eq!(attempt.score(), 3);
        assert!(!attempt.submit());
    }

    #[test]
    fn out_of_range_selections_are_ignored() {
        let mut attempt = three_question_attempt();
        attempt.select(3, "A".to_string());
        assert_eq!(attempt.answered_count(), 0);
    }

    #[test]
    fn progress_is_whole_percent_rounded_down() {
        let mut attempt = three_question_attempt();
        assert_eq!(attempt.progress_percent(), 0);
        attempt.select(0, "A".to_string());
        assert_eq!(attempt.progress_percent(), 33);
        attempt.select(1, "X".to_string());
        assert_eq!(attempt.progress_percent(), 66);
        attempt.select(2, "C".to_string());
        assert_eq!(attempt.progress_percent(), 100);
    }

    #[test]
    fn zero_question_record_is_immediately_complete() {
        let attempt = Attempt::new(record(vec![]));
        assert!(attempt.graded());
        assert_eq!(attempt.score(), 0);
        assert_eq!(attempt.progress_percent(), 0);
        assert_eq!(attempt.tier(), ScoreTier::KeepLearning);
    }

    #[test]
    fn exactly_half_is_the_low_tier() {
        assert_eq!(ScoreTier::for_score(2, 4), ScoreTier::KeepLearning);
        assert_eq!(ScoreTier::for_score(3, 4), ScoreTier::Good);
        assert_eq!(ScoreTier::for_score(4, 4), ScoreTier::Perfect);
        assert_eq!(ScoreTier::for_score(0, 1), ScoreTier::KeepLearning);
    }
}
