//! labsql CLI
//!
//! Command-line tool that parses a single-row INSERT statement and prints
//! the result.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use labsql_core::Parser as InsertParser;
use labsql_core::{Insert, Token, prepare_tokens, tokenize};

/// Parse single-row SQL INSERT statements.
#[derive(Parser)]
#[command(name = "labsql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL text to parse (read from --file or stdin when omitted).
    sql: Option<String>,

    /// Read the SQL text from a file.
    #[arg(short, long, conflicts_with = "sql")]
    file: Option<PathBuf>,

    /// Output format.
    #[arg(short = 'o', long, env = "LABSQL_FORMAT", value_enum, default_value_t = Format::Tree)]
    format: Format,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

/// How the result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pretty-printed syntax tree.
    Tree,
    /// Canonical SQL rendering.
    Sql,
    /// JSON syntax tree.
    Json,
    /// Prepared token sequence, without parsing.
    Tokens,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let source = read_source(&cli)?;
    debug!(bytes = source.len(), format = ?cli.format, "read input");

    let output = render(cli.format, tokenize(&source))?;
    println!("{output}");
    Ok(())
}

/// Reads the SQL text from the argument, the file, or stdin.
fn read_source(cli: &Cli) -> anyhow::Result<String> {
    if let Some(sql) = &cli.sql {
        return Ok(sql.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("Failed to read stdin")?;
    Ok(source)
}

/// Renders tokenized input in the requested format.
fn render(format: Format, tokens: Vec<Token>) -> anyhow::Result<String> {
    let output = match format {
        Format::Tree => format!("{:#?}", parse(tokens)?),
        Format::Sql => parse(tokens)?.to_string(),
        Format::Json => serde_json::to_string_pretty(&parse(tokens)?)?,
        Format::Tokens => render_tokens(&prepare_tokens(tokens)),
    };
    Ok(output)
}

fn parse(tokens: Vec<Token>) -> anyhow::Result<Insert> {
    InsertParser::parse(tokens).context("Invalid INSERT statement")
}

/// One line per token: position, kind, escaped lexeme.
fn render_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .enumerate()
        .map(|(position, token)| format!("{position:>4}  {:<12} {:?}", token.kind, token.lexeme))
        .collect::<Vec<_>>()
        .join("\n")
}
