use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

use quizsheet::{DocxDecoder, ExportFormat, QuizConfig, XlsxWriter};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Input .docx quiz (defaults to quiz.docx)
    input: Option<PathBuf>,

    /// Output file (defaults to quiz_export.xlsx)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    /// Name of the worksheet tab
    #[arg(long)]
    sheet_name: Option<String>,

    /// Config file (defaults to <config dir>/quizsheet/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<QuizConfig> {
        let mut config = QuizConfig::load(self.config.as_deref())?;
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if let Some(sheet_name) = &self.sheet_name {
            config.sheet_name = sheet_name.clone();
        }
        Ok(config)
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<()> {
    if cli.init_config {
        let path = QuizConfig::init_default()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let config = cli.resolve_config()?;
    quizsheet::run(&config, &DocxDecoder, &XlsxWriter)?;
    Ok(())
}
