//! The quiz loop: present each problem, read one answer, race the clock.
//!
//! In timed mode every line read runs on its own task and reports through a
//! single-use oneshot channel, raced against one per-run countdown. When the
//! countdown wins, the pending read is abandoned rather than cancelled; the
//! input primitive offers no interrupt, so the task stays parked until the
//! process exits.

use std::io;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::oneshot;
use tokio::time::{sleep_until, Instant};

use crate::error::QuizError;
use crate::outcome::{AnswerRecord, QuizOutcome, QuizResult};
use crate::problem::{Problem, ProblemSet};

/// How a submitted answer is compared against the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Byte-for-byte equality of the trimmed strings.
    #[default]
    Exact,
    /// ASCII-case-insensitive equality of the trimmed strings.
    IgnoreCase,
}

impl MatchMode {
    /// Compare a trimmed answer against the expected one.
    pub fn matches(self, given: &str, expected: &str) -> bool {
        match self {
            MatchMode::Exact => given == expected,
            MatchMode::IgnoreCase => given.eq_ignore_ascii_case(expected),
        }
    }
}

/// Configuration for a single quiz run.
///
/// The default is the untimed, exact-matching quiz.
#[derive(Debug, Clone, Default)]
pub struct QuizConfig {
    /// Wall-clock budget for the whole quiz, not per question. `None`
    /// disables the countdown and the per-question race with it.
    pub time_limit: Option<Duration>,
    /// Answer comparison rule.
    pub match_mode: MatchMode,
}

/// Administers a problem set over an input/output pair.
pub struct QuizRunner<R, W> {
    input: BufReader<R>,
    output: W,
    config: QuizConfig,
}

impl<R, W> QuizRunner<R, W>
where
    R: AsyncRead + Send + Unpin + 'static,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, config: QuizConfig) -> Self {
        Self {
            input: BufReader::new(input),
            output,
            config,
        }
    }

    /// Run the quiz to completion or until the countdown fires.
    ///
    /// Consumes the runner: a timed-out run has handed its reader to an
    /// abandoned background task and cannot be reused.
    pub async fn run(self, problems: ProblemSet) -> Result<QuizOutcome, QuizError> {
        match self.config.time_limit {
            Some(limit) => self.run_timed(problems, limit).await,
            None => self.run_untimed(problems).await,
        }
    }

    async fn run_untimed(self, problems: ProblemSet) -> Result<QuizOutcome, QuizError> {
        let Self {
            mut input,
            mut output,
            config,
        } = self;
        let mut score = Scorecard::new(problems.len());

        for (index, problem) in problems.iter().enumerate() {
            write_prompt(&mut output, index, problem).await?;
            let given = read_trimmed_line(&mut input).await?;
            score.grade(problem, given, config.match_mode);
        }

        Ok(score.finish(false))
    }

    async fn run_timed(
        self,
        problems: ProblemSet,
        limit: Duration,
    ) -> Result<QuizOutcome, QuizError> {
        let Self {
            input,
            mut output,
            config,
        } = self;

        // One countdown for the whole run, started before the first problem.
        let deadline = Instant::now() + limit;
        let mut score = Scorecard::new(problems.len());
        let mut reader = input;

        for (index, problem) in problems.iter().enumerate() {
            write_prompt(&mut output, index, problem).await?;

            match race_read(reader, deadline).await? {
                ReadOutcome::Answer {
                    line,
                    reader: handed_back,
                } => {
                    reader = handed_back;
                    score.grade(problem, line, config.match_mode);
                }
                ReadOutcome::TimedOut => {
                    tracing::debug!("countdown fired on question {}", index + 1);
                    output.write_all(b"\nTime's up!\n").await?;
                    output.flush().await?;
                    return Ok(score.finish(true));
                }
            }
        }

        Ok(score.finish(false))
    }
}

/// Outcome of racing one background read against the countdown.
enum ReadOutcome<R> {
    /// The answer arrived first; the reader comes back for the next question.
    Answer {
        line: String,
        reader: BufReader<R>,
    },
    /// The countdown fired first; the read stays parked on its task.
    TimedOut,
}

/// Race one background line read against the shared countdown.
///
/// The read reports through a oneshot channel: write-once, read-once per
/// question, so no state is ever shared between the two tasks.
async fn race_read<R>(
    reader: BufReader<R>,
    deadline: Instant,
) -> Result<ReadOutcome<R>, QuizError>
where
    R: AsyncRead + Send + Unpin + 'static,
{
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let mut reader = reader;
        let line = read_trimmed_line(&mut reader).await;
        // The receiver is gone when the countdown already won.
        let _ = tx.send((line, reader));
    });

    tokio::select! {
        // Countdown first: a zero limit must win even when an answer is
        // already buffered.
        biased;
        _ = sleep_until(deadline) => Ok(ReadOutcome::TimedOut),
        handed = rx => match handed {
            Ok((Ok(line), reader)) => Ok(ReadOutcome::Answer { line, reader }),
            Ok((Err(e), _)) => Err(QuizError::Io(e)),
            // The read task can only drop its sender by panicking.
            Err(_) => Err(QuizError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "answer reader task dropped",
            ))),
        },
    }
}

/// Read one line, trimmed. End of input yields an empty answer; the quiz
/// scores it as an ordinary (wrong) response rather than failing.
async fn read_trimmed_line<R>(reader: &mut R) -> io::Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(line.trim().to_string())
}

async fn write_prompt<W>(output: &mut W, index: usize, problem: &Problem) -> Result<(), QuizError>
where
    W: AsyncWrite + Unpin,
{
    let prompt = format!("{}> {} = ", index + 1, problem.question);
    output.write_all(prompt.as_bytes()).await?;
    // No trailing newline, so the sink has to be flushed by hand.
    output.flush().await?;
    Ok(())
}

/// Running counters plus the per-question record behind them.
struct Scorecard {
    result: QuizResult,
    answers: Vec<AnswerRecord>,
}

impl Scorecard {
    fn new(total: usize) -> Self {
        Self {
            result: QuizResult {
                correct: 0,
                attempted: 0,
                total,
            },
            answers: Vec::with_capacity(total),
        }
    }

    fn grade(&mut self, problem: &Problem, given: String, mode: MatchMode) {
        self.result.attempted += 1;
        let correct = mode.matches(&given, &problem.answer);
        if correct {
            self.result.correct += 1;
        }
        self.answers.push(AnswerRecord {
            question: problem.question.clone(),
            expected: problem.answer.clone(),
            given,
            correct,
        });
    }

    fn finish(self, timed_out: bool) -> QuizOutcome {
        QuizOutcome {
            result: self.result,
            answers: self.answers,
            timed_out,
        }
    }
}
