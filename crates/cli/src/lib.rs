use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use iconclass_notation::NotationDocument;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod config;
pub mod integrate;
pub mod report;

use config::IntegrationConfig;
use report::{KeywordTally, ReferenceTally, RunReport};

fn print_stdout(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "iconclass-smell")]
#[command(about = "Merge smell taxonomies into Iconclass keyword and notation files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Pretty-print the JSON report
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add cross-references to entries of a notation file
    #[command(name = "add-reference")]
    AddReference(AddReferenceArgs),

    /// Run the full keyword and cross-reference integration
    Integrate(IntegrateArgs),
}

#[derive(Args)]
struct AddReferenceArgs {
    /// Notation file to read
    notations: PathBuf,

    /// Where to write the edited notation file
    #[arg(long)]
    out: PathBuf,

    /// Reference to add, applied in order (repeatable)
    #[arg(long = "ref", value_name = "FROM=TO", required = true, value_parser = parse_reference_pair)]
    refs: Vec<(String, String)>,
}

#[derive(Args)]
struct IntegrateArgs {
    /// Config file (defaults to ./iconclass-smell.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn parse_reference_pair(raw: &str) -> Result<(String, String), String> {
    let (from, to) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FROM=TO, got {raw:?}"))?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(format!("expected FROM=TO, got {raw:?}"));
    }
    Ok((from.to_string(), to.to_string()))
}

pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let report = match cli.command {
        Commands::AddReference(args) => run_add_reference(args)?,
        Commands::Integrate(args) => run_integrate(args)?,
    };
    print_stdout(&report.to_json(cli.pretty)?)
}

fn run_add_reference(args: AddReferenceArgs) -> Result<RunReport> {
    let mut doc = NotationDocument::load(&args.notations)?;
    let mut tally = ReferenceTally::default();
    for (from, to) in &args.refs {
        tally.apply(&mut doc, from, to)?;
    }
    doc.save(&args.out)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    Ok(RunReport::new(
        Vec::new(),
        KeywordTally::default(),
        tally,
        args.out,
    ))
}

fn run_integrate(args: IntegrateArgs) -> Result<RunReport> {
    let config = IntegrationConfig::discover(args.config.as_deref())?;
    integrate::run(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_reference_pair() {
        assert_eq!(
            parse_reference_pair("11A11=31A3331"),
            Ok(("11A11".to_string(), "31A3331".to_string()))
        );
        assert_eq!(
            parse_reference_pair(" 5 = 41 "),
            Ok(("5".to_string(), "41".to_string()))
        );
        assert!(parse_reference_pair("11A11").is_err());
        assert!(parse_reference_pair("=41").is_err());
        assert!(parse_reference_pair("5=").is_err());
    }
}
