//! Ask command

use crate::app::{OutputFormat, QuestionArgs};
use crate::output;
use anyhow::Result;
use freshcast_core::Orchestrator;

pub async fn run(args: QuestionArgs, orchestrator: &Orchestrator, format: OutputFormat) -> Result<()> {
    let question = args.text();
    if question.trim().is_empty() {
        anyhow::bail!("Please provide a question");
    }

    let answer = orchestrator.answer(&question).await;
    for failure in &answer.failures {
        tracing::debug!("{:?} degraded: {}", failure.capability, failure.message);
    }
    print!("{}", output::format_answer(&answer, format));
    Ok(())
}
