//! Problem set construction and shuffling.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::loader::Record;

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Question text, shown verbatim in the prompt.
    pub question: String,
    /// Expected answer, whitespace-trimmed.
    pub answer: String,
}

/// An ordered sequence of problems for one quiz run.
#[derive(Debug, Clone, Default)]
pub struct ProblemSet {
    problems: Vec<Problem>,
}

impl ProblemSet {
    /// Build a problem set from raw records, preserving row order.
    ///
    /// The answer field is trimmed; the question is kept exactly as
    /// written.
    pub fn from_records(records: Vec<Record>) -> Self {
        let problems = records
            .into_iter()
            .map(|r| Problem {
                question: r.question,
                answer: r.answer.trim().to_string(),
            })
            .collect();
        Self { problems }
    }

    /// Uniformly permute the problems with the caller's RNG. A seeded RNG
    /// gives a deterministic order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.problems.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Problem> {
        self.problems.iter()
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(question: &str, answer: &str) -> Record {
        Record {
            question: question.into(),
            answer: answer.into(),
        }
    }

    #[test]
    fn builds_in_row_order_and_trims_answers() {
        let set = ProblemSet::from_records(vec![record("2+2", " 4 "), record("3+3", "6\t")]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.problems()[0].question, "2+2");
        assert_eq!(set.problems()[0].answer, "4");
        assert_eq!(set.problems()[1].answer, "6");
    }

    #[test]
    fn questions_are_not_trimmed() {
        let set = ProblemSet::from_records(vec![record(" spaced question ", "a")]);
        assert_eq!(set.problems()[0].question, " spaced question ");
    }

    #[test]
    fn shuffle_is_a_bijection() {
        let records: Vec<Record> = (0..50)
            .map(|i| record(&format!("q{i}"), &format!("a{i}")))
            .collect();
        let mut set = ProblemSet::from_records(records);
        let mut before: Vec<Problem> = set.problems().to_vec();

        let mut rng = StdRng::seed_from_u64(42);
        set.shuffle(&mut rng);

        let mut after: Vec<Problem> = set.problems().to_vec();
        before.sort_by(|a, b| a.question.cmp(&b.question));
        after.sort_by(|a, b| a.question.cmp(&b.question));
        assert_eq!(before, after);
    }

    #[test]
    fn shuffle_is_deterministic_for_a_fixed_seed() {
        let records: Vec<Record> = (0..20)
            .map(|i| record(&format!("q{i}"), &format!("a{i}")))
            .collect();

        let mut first = ProblemSet::from_records(records.clone());
        let mut second = ProblemSet::from_records(records);

        first.shuffle(&mut StdRng::seed_from_u64(7));
        second.shuffle(&mut StdRng::seed_from_u64(7));

        assert_eq!(first.problems(), second.problems());
    }

    #[test]
    fn empty_set() {
        let set = ProblemSet::from_records(vec![]);
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }
}
