use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use styled_spans::CodecOptions;
use styled_spans::category::{self, Tag};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

/// Convert between styled text and native text spans.
#[derive(Parser)]
#[command(name = "styled-spans", version)]
struct Cli {
    /// YAML file with codec options.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fail on the first undecodable span instead of skipping it.
    #[arg(long, global = true)]
    strict: bool,

    /// Raise log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Turn a styled text JSON file into native spans.
    Encode {
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recover styled text from a native span JSON file.
    Decode {
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Work with single category strings.
    Category {
        #[command(subcommand)]
        command: CategoryCommand,
    },
}

#[derive(Subcommand)]
enum CategoryCommand {
    /// Print a category string as JSON (`null` if it is not a category).
    Decode { raw: String },

    /// Build a category string from a tag and/or a target.
    Encode {
        #[arg(long)]
        tag: Option<Tag>,

        #[arg(long)]
        url: Option<Url>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "styled_spans=warn",
        1 => "styled_spans=debug",
        _ => "styled_spans=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries the converted output.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn write_output(out: String, output: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    match output {
        Some(path) => {
            fs::write(&path, out + "\n")?;
            info!(path = %path.display(), "wrote output");
        }
        None => println!("{out}"),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut opts = match &cli.config {
        Some(path) => CodecOptions::load(path)?,
        None => CodecOptions::default(),
    };
    if cli.strict {
        opts.strict = true;
    }

    match cli.command {
        Command::Encode { input, output } => {
            write_output(styled_spans::encode_file(&input, &opts)?, output)?;
        }
        Command::Decode { input, output } => {
            write_output(styled_spans::decode_file(&input, &opts)?, output)?;
        }
        Command::Category { command } => match command {
            CategoryCommand::Decode { raw } => {
                let decoded = category::decode(&raw)?;
                println!("{}", serde_json::to_string_pretty(&decoded)?);
            }
            CategoryCommand::Encode { tag, url } => {
                println!("{}", category::encode(tag.as_ref(), url.as_ref())?);
            }
        },
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
