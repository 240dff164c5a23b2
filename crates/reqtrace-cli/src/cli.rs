//! Command-line definition and command dispatch.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use reqtrace_gherkin::{FeatureFile, FeatureLoadError, load_feature_file, render};
use tracing::{debug, info, warn};

use crate::config::LogLevel;
use crate::discovery::collect_feature_files;
use crate::output::{
    failure_reason, write_check_failure, write_check_ok, write_check_summary, write_json,
    write_scenario, write_step, write_text,
};
use crate::report::{scenario_reports, step_reports};

/// Check and list Gherkin feature files.
#[derive(Parser, Debug)]
#[command(name = "reqtrace", version, about)]
pub(crate) struct Cli {
    /// Log level (trace, debug, info, warn, error); overrides
    /// `REQTRACE_LOG_LEVEL`.
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Parse feature files and report the first grammar error of each.
    Check(PathArgs),
    /// Print the normalised rendering of one feature file.
    Render {
        /// Feature file to render.
        file: PathBuf,
    },
    /// List every step with its resolved keyword and parameters.
    Steps(StepsArgs),
    /// List scenarios, optionally expanding outlines row by row.
    Scenarios(ScenariosArgs),
}

#[derive(Args, Debug)]
pub(crate) struct PathArgs {
    /// Feature files or directories searched for `.feature` files.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct StepsArgs {
    #[command(flatten)]
    pub paths: PathArgs,
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScenariosArgs {
    #[command(flatten)]
    pub paths: PathArgs,
    /// List each Examples row of an outline as its own scenario.
    #[arg(long)]
    pub expand: bool,
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,
}

/// Run `command`, writing listings to `out`.
///
/// Returns the number of feature files that could not be processed; they are
/// logged and skipped without stopping the batch.
pub(crate) fn run(command: &Command, out: &mut dyn Write) -> Result<usize> {
    let failed = match command {
        Command::Check(args) => handle_check(args, out)?,
        Command::Render { file } => handle_render(file, out).map(|()| 0)?,
        Command::Steps(args) => handle_steps(args, out)?,
        Command::Scenarios(args) => handle_scenarios(args, out)?,
    };
    out.flush().wrap_err("failed to flush output")?;
    Ok(failed)
}

/// Every discovered file with its parse result, in path order.
fn load_all(paths: &[PathBuf]) -> Result<Vec<(PathBuf, Result<FeatureFile, FeatureLoadError>)>> {
    let files = collect_feature_files(paths)?;
    Ok(files
        .into_iter()
        .map(|path| {
            let result = load_feature_file(&path);
            (path, result)
        })
        .collect())
}

fn log_failure(path: &Path, error: &FeatureLoadError) {
    warn!(
        path = %path.display(),
        error = %failure_reason(error),
        "skipping feature file"
    );
}

fn handle_check(paths: &PathArgs, out: &mut dyn Write) -> Result<usize> {
    let loaded = load_all(&paths.paths)?;
    let mut failed = 0;
    for (path, result) in &loaded {
        match result {
            Ok(doc) => {
                debug!(
                    path = %path.display(),
                    children = doc.feature().children().len(),
                    "feature file is valid"
                );
                write_check_ok(out, path)?;
            }
            Err(error) => {
                failed += 1;
                log_failure(path, error);
                write_check_failure(out, path, error)?;
            }
        }
    }
    write_check_summary(out, loaded.len(), failed)?;
    info!(files = loaded.len(), failed, "check complete");
    Ok(failed)
}

fn handle_render(file: &Path, out: &mut dyn Write) -> Result<()> {
    let doc = load_feature_file(file)?;
    write_text(out, &render(&doc))
}

fn handle_steps(args: &StepsArgs, out: &mut dyn Write) -> Result<usize> {
    let mut failed = 0;
    let mut reports = Vec::new();
    for (path, result) in load_all(&args.paths.paths)? {
        match result {
            Ok(doc) => {
                reports.extend(step_reports(&path.display().to_string(), doc.feature()));
            }
            Err(error) => {
                failed += 1;
                log_failure(&path, &error);
            }
        }
    }
    if args.json {
        write_json(out, &reports)?;
    } else {
        reports.iter().try_for_each(|step| write_step(out, step))?;
    }
    Ok(failed)
}

fn handle_scenarios(args: &ScenariosArgs, out: &mut dyn Write) -> Result<usize> {
    let mut failed = 0;
    let mut reports = Vec::new();
    for (path, result) in load_all(&args.paths.paths)? {
        let listed = match result {
            Ok(doc) => scenario_reports(&path.display().to_string(), doc.feature(), args.expand),
            Err(error) => {
                failed += 1;
                log_failure(&path, &error);
                continue;
            }
        };
        match listed {
            Ok(listed) => reports.extend(listed),
            Err(error) => {
                failed += 1;
                warn!(path = %path.display(), %error, "cannot expand scenario outline");
            }
        }
    }
    if args.json {
        write_json(out, &reports)?;
    } else {
        reports
            .iter()
            .try_for_each(|scenario| write_scenario(out, scenario))?;
    }
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use clap::CommandFactory;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn features() -> TempDir {
        let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("{err}"));
        fs::write(
            dir.path().join("good.feature"),
            "Feature: Good\n  Scenario: one\n    Given a <thing>\n    And another\n",
        )
        .unwrap_or_else(|err| panic!("{err}"));
        fs::write(
            dir.path().join("bad.feature"),
            "Feature: Bad\n  Scenario: one\n    Given text\n      \"\"\"\n      never closed\n",
        )
        .unwrap_or_else(|err| panic!("{err}"));
        dir
    }

    fn run_to_string(command: &Command) -> (usize, String) {
        let mut buffer = Vec::new();
        let failed = run(command, &mut buffer).unwrap_or_else(|err| panic!("{err:#}"));
        let text = String::from_utf8(buffer).unwrap_or_else(|err| panic!("{err}"));
        (failed, text)
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_log_level_after_the_subcommand() {
        let cli = Cli::try_parse_from(["reqtrace", "check", "features", "--log-level", "debug"])
            .unwrap_or_else(|err| panic!("{err}"));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(matches!(cli.command, Command::Check(_)));
    }

    #[rstest]
    fn check_reports_each_file_and_counts_failures(features: TempDir) {
        let command = Command::Check(PathArgs {
            paths: vec![features.path().to_path_buf()],
        });
        let (failed, text) = run_to_string(&command);
        assert_eq!(failed, 1);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.first().is_some_and(|l| l.starts_with("FAIL ")
            && l.ends_with("bad.feature: ending DocString could not be found for the DocString opened at line 4")));
        assert!(lines.get(1).is_some_and(|l| l.starts_with("ok   ") && l.ends_with("good.feature")));
        assert_eq!(lines.get(2), Some(&"checked 2 feature files: 1 ok, 1 failed"));
    }

    #[rstest]
    fn steps_skip_failed_files(features: TempDir) {
        let command = Command::Steps(StepsArgs {
            paths: PathArgs {
                paths: vec![features.path().to_path_buf()],
            },
            json: true,
        });
        let (failed, text) = run_to_string(&command);
        assert_eq!(failed, 1);
        let value: serde_json::Value =
            serde_json::from_str(&text).unwrap_or_else(|err| panic!("{err}"));
        let steps = value.as_array().unwrap_or_else(|| panic!("expected an array"));
        assert_eq!(steps.len(), 2);
        let second = steps.get(1).unwrap_or_else(|| panic!("missing step"));
        assert_eq!(second.get("keyword"), Some(&serde_json::Value::from("And")));
        assert_eq!(
            second.get("resolved_keyword"),
            Some(&serde_json::Value::from("Given"))
        );
    }

    #[test]
    fn render_fails_for_invalid_files() {
        let dir = tempfile::tempdir().unwrap_or_else(|err| panic!("{err}"));
        let file = dir.path().join("x.feature");
        fs::write(&file, "Scenario: orphan\n").unwrap_or_else(|err| panic!("{err}"));
        let mut buffer = Vec::new();
        let result = run(&Command::Render { file }, &mut buffer);
        let Err(err) = result else {
            panic!("expected a render failure");
        };
        assert!(format!("{err:#}").contains("no Feature line found: line 1 is a Scenario line"));
    }
}
