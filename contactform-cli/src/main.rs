use anyhow::Result;
use clap::{Parser, Subcommand};
use contactform_cli::commands;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "contactform")]
#[command(about = "SimpleWeb contact form - validate and render submissions", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one submission and print per-field verdicts
    Validate {
        /// Input JSON file (flat object or list of {name, value}); "-" for stdin
        #[arg(short, long)]
        input: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit one submission to a fresh form and render the result
    Submit {
        /// Input JSON file (flat object or list of {name, value}); "-" for stdin
        #[arg(short, long)]
        input: String,

        /// Output file for the rendered markup
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate one flat submission per line
    Batch {
        /// Input JSONL file; "-" for stdin
        #[arg(short, long)]
        input: String,

        /// Output JSON file for per-line reports
        #[arg(short, long)]
        output: Option<String>,

        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Validate { input, json } => commands::validate::execute(&input, json).map(|_| ()),

        Commands::Submit { input, output } => {
            commands::submit::execute(&input, output.as_deref()).map(|_| ())
        }

        Commands::Batch {
            input,
            output,
            progress,
        } => commands::batch::execute(&input, output.as_deref(), progress).map(|_| ()),
    }
}
