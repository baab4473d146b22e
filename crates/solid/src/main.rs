use std::io::Write;

use anyhow::Context;
use clap::{Parser, Subcommand};

use solid::{catalog, run_principles, DemoContext, Outcome, Principle, SolidError};

/// Top-level CLI parser for the `solid` binary.
#[derive(Debug, Parser)]
#[command(name = "solid", version, about = "Violating and compliant examples of SOLID")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Record violations and continue with the next demonstration
    #[arg(short, long, global = true)]
    keep_going: bool,

    /// Skip the deliberately violating calls
    #[arg(short, long, global = true, conflicts_with = "keep_going")]
    skip_violations: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available demonstrations
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the named demonstrations in the order given
    Run {
        /// Demonstrations to run
        #[arg(required = true, value_parser = parse_principle)]
        principles: Vec<Principle>,
    },
    /// Run every demonstration in catalog order
    All,
}

/// Accepts an acronym or a full name in any case.
fn parse_principle(value: &str) -> Result<Principle, SolidError> {
    value.parse()
}

impl Cli {
    fn context(&self) -> DemoContext {
        DemoContext {
            keep_going: self.keep_going,
            trigger_violations: !self.skip_violations,
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{}", error_line(&error));
        std::process::exit(1);
    }
}

/// The stderr line for a run that ended in an error.
fn error_line(error: &anyhow::Error) -> String {
    format!("solid error: {error:#}")
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut err = std::io::stderr();

    match &cli.command {
        Command::List { json } => list(*json, &mut out),
        Command::Run { principles } => {
            demonstrate(principles, &cli.context(), &mut out, &mut err)
        }
        Command::All => demonstrate(&Principle::ALL, &cli.context(), &mut out, &mut err),
    }
}

fn list(json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let entries = catalog();
    if json {
        serde_json::to_writer_pretty(&mut *out, &entries).context("failed to write catalog")?;
        writeln!(out)?;
        return Ok(());
    }

    for entry in entries {
        let marker = if entry.has_violation { " (violates)" } else { "" };
        writeln!(out, "{:<8}{}{}", entry.principle, entry.name, marker)?;
        writeln!(out, "        {}", entry.summary)?;
    }
    Ok(())
}

/// Run the demonstrations to `out`; recorded violations are listed on `err`.
fn demonstrate(
    principles: &[Principle],
    ctx: &DemoContext,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<()> {
    let report = run_principles(principles, ctx, out)?;

    for (principle, outcome) in &report.outcomes {
        if let Outcome::Violated(violation) = outcome {
            writeln!(err, "{principle}: {violation}")?;
        }
    }
    if !report.is_clean() {
        writeln!(
            err,
            "{} of {} demonstrations stopped at a violation",
            report.violations(),
            report.outcomes.len()
        )?;
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SOLID_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{demonstrate, error_line, Cli, Command};
    use solid::{DemoContext, Principle};

    fn demonstrate_all(ctx: &DemoContext) -> (String, String, anyhow::Result<()>) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = demonstrate(&Principle::ALL, ctx, &mut out, &mut err);
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            result,
        )
    }

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_run_with_several_principles() {
        let cli = Cli::parse_from(["solid", "run", "lsp", "dip", "--keep-going"]);
        assert!(cli.keep_going);
        match cli.command {
            Command::Run { principles } => {
                assert_eq!(principles, vec![Principle::Lsp, Principle::Dip]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_principles_by_any_case_and_full_name() {
        let cli = Cli::try_parse_from(["solid", "run", "LSP", "open/closed principle"]).unwrap();
        match cli.command {
            Command::Run { principles } => {
                assert_eq!(principles, vec![Principle::Lsp, Principle::Ocp]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_principle() {
        let err = Cli::try_parse_from(["solid", "run", "xyz"]).unwrap_err();
        assert!(err.to_string().contains("Unknown principle: xyz"));
    }

    #[test]
    fn violation_ends_run_with_error_line() {
        let (out, err, result) = demonstrate_all(&DemoContext::new());
        let error = result.unwrap_err();
        assert_eq!(
            error_line(&error),
            "solid error: Unsupported operation: Penguins cannot fly"
        );
        assert!(out.contains(Principle::Lsp.title()));
        assert!(!out.contains(Principle::Dip.title()));
        assert!(err.is_empty());
    }

    #[test]
    fn keep_going_lists_violations_and_succeeds() {
        let (out, err, result) = demonstrate_all(&DemoContext::keep_going());
        result.unwrap();
        assert!(out.contains(Principle::Dip.title()));
        assert_eq!(
            err,
            "lsp: Unsupported operation: Penguins cannot fly\n\
             isp: Unsupported operation: Faxing not supported\n\
             2 of 6 demonstrations stopped at a violation\n"
        );
    }

    #[test]
    fn clean_run_writes_nothing_to_stderr() {
        let (_, err, result) = demonstrate_all(&DemoContext::skip_violations());
        result.unwrap();
        assert!(err.is_empty());
    }

    #[test]
    fn skip_violations_turns_off_trigger() {
        let cli = Cli::parse_from(["solid", "all", "--skip-violations"]);
        assert!(!cli.context().trigger_violations);
    }

    #[test]
    fn list_json_contains_every_principle() {
        let mut buf = Vec::new();
        super::list(true, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(Principle::ALL.len()));
        assert_eq!(value[0]["principle"], "basics");
    }
}
