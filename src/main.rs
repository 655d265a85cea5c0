#![forbid(unsafe_code)]
//! resumegen command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use resumegen::commands::{
    execute_init, execute_render, execute_validate, InitOptions, RenderOptions, ValidateOptions,
};

#[derive(Parser)]
#[command(name = "resumegen")]
#[command(about = "Render a YAML resume description into a Word document")]
#[command(version)]
struct Cli {
    /// Command to run (default: render)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Resume config file path
    #[arg(short, long, global = true, default_value = "resume_config.yaml")]
    config: PathBuf,

    /// Output document path
    #[arg(short, long, global = true, default_value = "generated_resume.docx")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the config into a .docx document
    Render,

    /// Check the config and print an outline without writing a document
    Validate {
        /// Output as JSON (default: human-readable)
        #[arg(long)]
        json: bool,
    },

    /// Write a sample config to start from
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Render) {
        Commands::Render => {
            let options = RenderOptions {
                config: cli.config,
                output: cli.output,
            };
            execute_render(options)?;
        }

        Commands::Validate { json } => {
            let options = ValidateOptions {
                config: cli.config,
                json,
            };
            execute_validate(options)?;
        }

        Commands::Init { force } => {
            let options = InitOptions {
                config: cli.config,
                force,
            };
            execute_init(options)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("✗").red(), e);
        std::process::exit(1);
    }
}
