use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use nameof_parser::tracing_setup::set_up_tracing;
use nameof_parser::{Grammar, NameRecord};
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GrammarChoice {
    /// Guess per description.
    Auto,
    /// Grammar of the toolchain this tool was built with.
    Host,
    Funcsig,
    PrettyFunction,
}

impl GrammarChoice {
    fn resolve(self, description: &str) -> Grammar {
        match self {
            GrammarChoice::Auto => Grammar::detect(description),
            GrammarChoice::Host => Grammar::HOST,
            GrammarChoice::Funcsig => Grammar::Funcsig,
            GrammarChoice::PrettyFunction => Grammar::PrettyFunction,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(about = "Extract symbol names from __FUNCSIG__ / __PRETTY_FUNCTION__ strings.")]
struct Args {
    /// Descriptions to parse. Read one per line from stdin (or `--input`) when omitted.
    descriptions: Vec<String>,

    /// Read descriptions from a file, one per line.
    #[arg(long, value_name = "PATH", conflicts_with = "descriptions")]
    input: Option<PathBuf>,

    /// Grammar of the descriptions.
    #[arg(long, value_enum, default_value_t = GrammarChoice::Auto)]
    grammar: GrammarChoice,

    /// Print the last name stem instead of the fully-qualified name.
    #[arg(long)]
    short: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log more (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    set_up_tracing(args.verbose).context("failed to install the trace subscriber")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.descriptions.is_empty() {
        for description in &args.descriptions {
            emit(&args, description, &mut out)?;
        }
        return Ok(());
    }

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => {
            let file = fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", index + 1))?;
        let description = line.trim_end_matches('\r');
        if description.trim().is_empty() {
            continue;
        }
        emit(&args, description, &mut out)?;
    }
    Ok(())
}

fn emit(args: &Args, description: &str, out: &mut impl Write) -> Result<()> {
    let grammar = args.grammar.resolve(description);
    debug!("parsing as {grammar}: {description}");

    let record = NameRecord::extract(grammar, description);
    if record.fully_qualified == description {
        info!("no symbol found in description, echoing it: {description}");
    }

    match args.format {
        OutputFormat::Text => {
            let name = if args.short { record.short } else { record.fully_qualified };
            writeln!(out, "{name}")?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(&record).context("failed to serialize record")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
