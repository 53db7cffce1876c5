//! Docgrid — decode a character grid from a published document.

mod config;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use docgrid::{
    html_to_lines, run, run_with, DocGridResult, DocumentSource, FileSource, HttpSource, Outcome,
    NO_DATA_MESSAGE,
};

#[derive(Parser)]
#[command(
    name = "docgrid",
    about = "Docgrid — print the character grid encoded in a published document",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Document URL (defaults to the built-in published document).
    #[arg(conflicts_with = "file")]
    url: Option<String>,

    /// Read the document from a local file instead of fetching it.
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Treat the document as HTML and decode its paragraph text.
    #[arg(long)]
    html: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   docgrid completions bash > ~/.local/share/bash-completion/completions/docgrid
    ///   docgrid completions zsh > ~/.zfunc/_docgrid
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(config::log_filter(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "docgrid", &mut std::io::stdout());
        return Ok(());
    }

    let source: Box<dyn DocumentSource> = match &cli.file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(config::resolve_url(cli.url.as_deref()))),
    };

    let result = if cli.html {
        run_with(source.as_ref(), |text| html_to_lines(&text))
    } else {
        run(source.as_ref())
    };

    let code = report(result, &mut std::io::stdout(), &mut std::io::stderr())?;
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

/// Print a run's result and return the process exit status.
///
/// A grid or the no-data message goes to `out` with status 0; an error goes
/// to `err` with status 1.
fn report(
    result: DocGridResult<Outcome>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<i32> {
    match result {
        Ok(Outcome::Rendered(grid)) => {
            writeln!(out, "{grid}")?;
            Ok(0)
        }
        Ok(Outcome::Empty) => {
            writeln!(out, "{NO_DATA_MESSAGE}")?;
            Ok(0)
        }
        Err(e) => {
            writeln!(err, "{e}")?;
            Ok(1)
        }
    }
}
