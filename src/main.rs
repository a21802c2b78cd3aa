//! CLI entry point for treemd

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use treemd::{ScanConfig, TokenCounter, TreeScanner, render_json, render_markdown, token_report};

const AFTER_HELP: &str = "\
Usage examples:
  $ treemd
  $ treemd /path/to/directory
  $ treemd -e js,ts
  $ treemd /path/to/directory -e js,ts
  $ treemd -s
  $ treemd | pbcopy

Caveats:
  - Files ignored by git in the scanned directory are left out (see --all).
  - .git, .gitignore, .dockerignore and package-lock.json are always left out.
  - Only text files are included in the output.";

#[derive(Parser, Debug)]
#[command(name = "treemd")]
#[command(about = "Generate a markdown representation of a directory structure and file contents")]
#[command(version)]
#[command(after_help = AFTER_HELP)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Comma-separated list of file extensions to include
    #[arg(
        short,
        long,
        value_delimiter = ',',
        value_name = "EXTENSIONS",
        env = "TREEMD_EXTENSIONS"
    )]
    extensions: Vec<String>,

    /// Suppress token count output
    #[arg(short, long)]
    silent: bool,

    /// Include files ignored by git (built-in exclusions still apply)
    #[arg(short, long)]
    all: bool,

    /// Exclude entries whose name matches pattern (can be used multiple times)
    #[arg(
        short = 'I',
        long = "ignore",
        value_name = "PATTERN",
        value_delimiter = ',',
        env = "TREEMD_IGNORE"
    )]
    ignore: Vec<String>,

    /// Visit entries in name order instead of filesystem order
    #[arg(long)]
    sort: bool,

    /// Output the scan as JSON instead of markdown
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let root = args
        .directory
        .canonicalize()
        .with_context(|| format!("cannot access '{}'", args.directory.display()))?;

    let config = ScanConfig {
        ignore_patterns: args.ignore,
        use_git: !args.all,
        sort: args.sort,
        ..Default::default()
    }
    .with_extensions(&args.extensions);

    let scan = TreeScanner::new(config).scan(&root)?;

    let document = if args.json {
        render_json(&scan).context("serialize scan")?
    } else {
        render_markdown(&scan)
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", document).context("write output")?;
    stdout.flush().context("write output")?;

    if !args.silent {
        match TokenCounter::new() {
            Ok(counter) => eprintln!("{}", token_report(counter.count(&document))),
            Err(e) => warn!("token count unavailable: {:#}", e),
        }
    }

    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("treemd: error: {:#}", e);
        process::exit(1);
    }
}
