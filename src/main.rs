//! Ikigai Compass binary - interactive quiz in the terminal.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;

use tracing::error;
use tracing_subscriber::EnvFilter;

use ikigai_compass::adapters::ai::{GeminiProvider, GeminiSettings};
use ikigai_compass::application::{AnalysisPipeline, RetryPolicy};
use ikigai_compass::config::AppConfig;
use ikigai_compass::domain::analysis::{to_markdown, AnalysisOutcome};
use ikigai_compass::domain::foundation::StateMachine;
use ikigai_compass::domain::questionnaire::{AnswerSet, SubmissionStatus, QUESTIONS};
use ikigai_compass::ports::ModelProvider;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(io::stderr)
        .init();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "failed to load configuration");
            eprintln!("Configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = config.validate() {
        eprintln!("Configuration error: {err}");
        eprintln!("Set IKIGAI__GEMINI__API_KEY in your environment or a .env file, then restart.");
        return ExitCode::FAILURE;
    }

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "quiz aborted");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    // validate() guarantees the key is present here.
    let settings = GeminiSettings::new(config.gemini.require_api_key()?)
        .with_model(&config.gemini.model)
        .with_base_url(&config.gemini.base_url)
        .with_timeout(config.gemini.timeout());
    let provider = Arc::new(GeminiProvider::new(settings)?);
    let info = provider.provider_info();
    tracing::debug!(provider = %info.name, model = %info.model, "model provider ready");
    let pipeline = AnalysisPipeline::with_policy(
        provider,
        RetryPolicy {
            max_attempts: config.retry.max_attempts,
            base_delay: config.retry.base_delay(),
        },
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Ikigai Compass");
    println!("Answer {} short questions to map your ikigai.\n", QUESTIONS.len());

    loop {
        let mut status = SubmissionStatus::Collecting;
        let answers = collect_answers(&mut input)?;

        status = status.transition_to(SubmissionStatus::Submitting)?;
        println!("\nAnalyzing your answers...");

        match pipeline.analyze(&answers).await {
            AnalysisOutcome::Report(report) => {
                status.transition_to(SubmissionStatus::Succeeded)?;
                let markdown = to_markdown(&report);
                println!("\n{markdown}");
                offer_save(&mut input, &markdown)?;
                return Ok(());
            }
            AnalysisOutcome::Failed(failure) => {
                status = status.transition_to(SubmissionStatus::Failed)?;
                println!("\n{}", failure.message);
                if !prompt_yes_no(&mut input, "Try again from the first question? [y/N] ")? {
                    return Ok(());
                }
                // Answers are not preserved; the retry restarts the quiz clean.
                status.transition_to(SubmissionStatus::Collecting)?;
            }
        }
    }
}

/// Walks through the question catalog, one answer per question.
///
/// `:back` returns to the previous question; answers must be non-empty
/// after trimming.
fn collect_answers(input: &mut impl BufRead) -> io::Result<AnswerSet> {
    let mut answers = AnswerSet::new();
    let mut index = 0;

    while index < QUESTIONS.len() {
        let question = &QUESTIONS[index];
        println!("\n[{}] Question {} of {}", question.category, index + 1, QUESTIONS.len());
        println!("{}", question.text);
        println!("({})", question.placeholder);
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the quiz was finished",
            ));
        }
        let trimmed = line.trim();

        if trimmed == ":back" {
            if index > 0 {
                index -= 1;
            }
            continue;
        }

        match answers.record(index, trimmed) {
            Ok(()) => index += 1,
            Err(_) => println!("Please enter an answer (or :back to go back)."),
        }
    }

    Ok(answers)
}

/// Offers to write the rendered analysis to `ikigai-analysis.md`.
fn offer_save(input: &mut impl BufRead, markdown: &str) -> io::Result<()> {
    if prompt_yes_no(input, "Save the analysis to ikigai-analysis.md? [y/N] ")? {
        std::fs::write("ikigai-analysis.md", markdown)?;
        println!("Saved.");
    }
    Ok(())
}

fn prompt_yes_no(input: &mut impl BufRead, prompt: &str) -> io::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
