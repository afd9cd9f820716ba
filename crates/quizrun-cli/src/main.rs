//! quizrun CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use quizrun_core::loader;
use quizrun_core::outcome::QuizOutcome;
use quizrun_core::problem::ProblemSet;
use quizrun_core::runner::{MatchMode, QuizConfig, QuizRunner};

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Timed CSV quiz runner")]
struct Cli {
    /// Path to a CSV file in "question,answer" format
    #[arg(long, default_value = "problems.csv")]
    file: PathBuf,

    /// Time limit for the whole quiz in seconds; omit for an untimed run
    #[arg(long)]
    limit: Option<u64>,

    /// Print a per-question review table after the quiz
    #[arg(long)]
    review: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizrun=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        // A timed-out run can leave the background stdin read parked; exit
        // directly instead of waiting on it.
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let records = loader::load_problem_file(&cli.file)?;
    let mut problems = ProblemSet::from_records(records);
    problems.shuffle(&mut rand::thread_rng());
    tracing::debug!(
        "quiz over {} problems from {}, limit {:?}",
        problems.len(),
        cli.file.display(),
        cli.limit
    );

    let timed = cli.limit.is_some();
    let config = QuizConfig {
        time_limit: cli.limit.map(Duration::from_secs),
        // The untimed quiz matches exactly; the timed one is forgiving
        // about case.
        match_mode: if timed {
            MatchMode::IgnoreCase
        } else {
            MatchMode::Exact
        },
    };

    let runner = QuizRunner::new(tokio::io::stdin(), tokio::io::stdout(), config);
    let outcome = runner.run(problems).await?;

    if cli.review {
        print_review(&outcome);
    }

    let summary = if timed {
        outcome.result.timed_summary()
    } else {
        outcome.result.untimed_summary()
    };
    println!("\n{summary}");

    Ok(())
}

fn print_review(outcome: &QuizOutcome) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Expected", ""]);

    for (i, answer) in outcome.answers.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&answer.question),
            Cell::new(&answer.given),
            Cell::new(&answer.expected),
            Cell::new(if answer.correct { "ok" } else { "miss" }),
        ]);
    }

    eprintln!("\n{table}");
}
