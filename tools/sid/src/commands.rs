//! CLI commands.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use sid_scoped::{ObjectId, ScopedId, ScopedIdFields, ScopedIdInput};
use tracing::{debug, info};

use crate::config::{Config, OutputFormat};
use crate::output::{self, CheckResult, ParsedView};

/// sid - inspect, validate, and compare scoped ids.
#[derive(Debug, Parser)]
#[command(name = "sid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, env = "SID_FORMAT", value_enum, default_value_t)]
    format: OutputFormat,

    /// Log level, used when RUST_LOG is not set.
    #[arg(long, global = true, env = "SID_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check whether values are valid scoped id strings.
    Check(CheckCommand),

    /// Parse a scoped id string and show its fields.
    Parse(ParseCommand),

    /// Build a scoped id from its parts.
    Create(CreateCommand),

    /// Compare two scoped ids (strings or JSON field records).
    Eq(EqCommand),

    /// Generate fresh object ids.
    NewObjectId(NewObjectIdCommand),
}

#[derive(Debug, Args)]
struct CheckCommand {
    /// Values to check.
    #[arg(required = true)]
    values: Vec<String>,
}

#[derive(Debug, Args)]
struct ParseCommand {
    /// Scoped id string, e.g. modules/511083bb08ce6b1b00000003.
    value: String,
}

#[derive(Debug, Args)]
struct CreateCommand {
    /// Scope name.
    #[arg(long)]
    scope: String,

    /// Object id.
    #[arg(long)]
    id: String,

    /// Object id or symbolic tag to pin the version to.
    #[arg(long)]
    version: Option<String>,
}

#[derive(Debug, Args)]
struct EqCommand {
    left: String,
    right: String,
}

#[derive(Debug, Args)]
struct NewObjectIdCommand {
    /// How many ids to generate.
    #[arg(long, default_value_t = 1)]
    count: usize,
}

impl Cli {
    /// Settings derived from global flags.
    pub fn config(&self) -> Config {
        Config {
            format: self.format,
            log_level: self.log_level.clone(),
        }
    }

    pub fn run(self) -> Result<()> {
        let config = self.config();
        config.init_logging();
        debug!(format = ?config.format, "configuration loaded");

        match self.command {
            Commands::Check(cmd) => check(&cmd, config.format),
            Commands::Parse(cmd) => parse(&cmd, config.format),
            Commands::Create(cmd) => create(&cmd, config.format),
            Commands::Eq(cmd) => eq(&cmd, config.format),
            Commands::NewObjectId(cmd) => new_object_id(&cmd, config.format),
        }
    }
}

fn check(cmd: &CheckCommand, format: OutputFormat) -> Result<()> {
    let results: Vec<CheckResult> = cmd
        .values
        .iter()
        .map(|value| CheckResult {
            input: value.clone(),
            valid: ScopedId::is_valid(value),
        })
        .collect();
    output::print_checks(&results, format)?;

    let invalid = results.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        bail!("{invalid} of {} values are not valid scoped ids", results.len());
    }
    Ok(())
}

fn parse(cmd: &ParseCommand, format: OutputFormat) -> Result<()> {
    output::print_parsed(&parse_view(&cmd.value)?, format)
}

fn parse_view(value: &str) -> Result<ParsedView> {
    let sid = ScopedId::parse(value).with_context(|| format!("failed to parse '{value}'"))?;
    Ok(ParsedView::from(&*sid))
}

fn create(cmd: &CreateCommand, format: OutputFormat) -> Result<()> {
    let sid = ScopedId::create(&cmd.scope, Some(&cmd.id), cmd.version.as_deref())
        .context("failed to create scoped id")?;
    info!(scoped_id = %sid, "created scoped id");
    output::print_value(&sid, format)
}

fn eq(cmd: &EqCommand, format: OutputFormat) -> Result<()> {
    output::print_value(&compare(&cmd.left, &cmd.right)?, format)
}

fn compare(left: &str, right: &str) -> Result<bool> {
    let left = Operand::read(left)?;
    let right = Operand::read(right)?;
    Ok(sid_scoped::equals(left.as_input(), right.as_input()))
}

fn new_object_id(cmd: &NewObjectIdCommand, format: OutputFormat) -> Result<()> {
    for _ in 0..cmd.count {
        output::print_value(&ObjectId::new(), format)?;
    }
    Ok(())
}

/// A command-line argument interpreted as a comparison operand.
#[derive(Debug)]
enum Operand {
    /// A valid canonical string, already parsed.
    Id(ScopedId),
    /// A JSON field record.
    Fields(ScopedIdFields),
    /// Anything else, compared as a string.
    Text(String),
}

impl Operand {
    fn read(arg: &str) -> Result<Self> {
        if arg.trim_start().starts_with('{') {
            let fields = serde_json::from_str(arg)
                .with_context(|| format!("invalid scoped id record: {arg}"))?;
            return Ok(Operand::Fields(fields));
        }
        Ok(match ScopedId::parse_opt(arg) {
            Some(sid) => Operand::Id(sid),
            None => Operand::Text(arg.to_string()),
        })
    }

    fn as_input(&self) -> ScopedIdInput<'_> {
        match self {
            Operand::Id(sid) => ScopedIdInput::Instance(sid),
            Operand::Fields(fields) => ScopedIdInput::Fields(fields),
            Operand::Text(s) => ScopedIdInput::Text(s),
        }
    }
}
