//! Route command

use crate::app::{OutputFormat, QuestionArgs};
use crate::output;
use anyhow::Result;
use freshcast_core::QueryRouter;

pub fn run(args: QuestionArgs, format: OutputFormat) -> Result<()> {
    let router = QueryRouter::bakery()?;
    let decision = router.route(&args.text());
    print!("{}", output::format_decision(&decision, format));
    Ok(())
}
