//! Quiz run results and score formatting.

/// Counters for one quiz run.
///
/// Invariant: `correct <= attempted <= total`. A timed-out run has
/// `attempted < total`; a completed run has `attempted == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuizResult {
    pub correct: usize,
    pub attempted: usize,
    pub total: usize,
}

impl QuizResult {
    /// Final score line for a timed run.
    pub fn timed_summary(&self) -> String {
        format!(
            "Score: {} correct out of {} attempted (total questions: {})",
            self.correct, self.attempted, self.total
        )
    }

    /// Final score line for an untimed run.
    pub fn untimed_summary(&self) -> String {
        format!("Score: {} correct out of {} total", self.correct, self.total)
    }
}

/// One graded answer.
#[derive(Debug, Clone)]
pub struct AnswerRecord {
    pub question: String,
    pub expected: String,
    pub given: String,
    pub correct: bool,
}

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct QuizOutcome {
    /// Score counters.
    pub result: QuizResult,
    /// Graded answers in the order they were asked.
    pub answers: Vec<AnswerRecord>,
    /// Whether the countdown ended the run early.
    pub timed_out: bool,
}
