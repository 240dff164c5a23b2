//! Helpers writing listings to the output stream.

use std::io::Write;
use std::path::Path;

use eyre::{Context, Result};
use reqtrace_gherkin::FeatureLoadError;
use serde::Serialize;

use crate::report::{ScenarioReport, StepReport, describe_keyword, describe_scenario};

pub(crate) fn write_check_ok(writer: &mut dyn Write, path: &Path) -> Result<()> {
    writeln!(writer, "ok   {}", path.display())
        .wrap_err_with(|| format!("failed to write check result for {}", path.display()))
}

pub(crate) fn write_check_failure(
    writer: &mut dyn Write,
    path: &Path,
    error: &FeatureLoadError,
) -> Result<()> {
    writeln!(writer, "FAIL {}: {}", path.display(), failure_reason(error))
        .wrap_err_with(|| format!("failed to write check result for {}", path.display()))
}

pub(crate) fn write_check_summary(writer: &mut dyn Write, total: usize, failed: usize) -> Result<()> {
    writeln!(
        writer,
        "checked {total} feature file{}: {} ok, {failed} failed",
        if total == 1 { "" } else { "s" },
        total.saturating_sub(failed)
    )
    .wrap_err("failed to write check summary")
}

/// Error text without the path prefix, which the caller already prints.
pub(crate) fn failure_reason(error: &FeatureLoadError) -> String {
    match error {
        FeatureLoadError::Io { source, .. } => source.to_string(),
        FeatureLoadError::Parse { source, .. } => source.to_string(),
    }
}

pub(crate) fn write_step(writer: &mut dyn Write, step: &StepReport) -> Result<()> {
    let mut line = format!(
        "{}:{}: {} {}",
        step.feature,
        step.line,
        describe_keyword(step),
        step.text
    );
    if !step.parameters.is_empty() {
        line.push_str(" [");
        line.push_str(&step.parameters.join(", "));
        line.push(']');
    }
    writeln!(writer, "{line}")
        .wrap_err_with(|| format!("failed to write step at {}:{}", step.feature, step.line))
}

pub(crate) fn write_scenario(writer: &mut dyn Write, scenario: &ScenarioReport) -> Result<()> {
    writeln!(
        writer,
        "{}:{}: {} ({} steps)",
        scenario.feature,
        scenario.line,
        describe_scenario(scenario),
        scenario.steps
    )
    .wrap_err_with(|| {
        format!(
            "failed to write scenario at {}:{}",
            scenario.feature, scenario.line
        )
    })
}

pub(crate) fn write_text(writer: &mut dyn Write, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .wrap_err("failed to write rendered feature")
}

pub(crate) fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).wrap_err("failed to serialise listing to JSON")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")?;
    writer.flush().wrap_err("failed to flush JSON output")
}
