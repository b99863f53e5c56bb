//! readiness CLI: score, take, and inspect career readiness assessments.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "readiness", version, about = "Career readiness assessment scoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a responses file
    Score {
        /// JSON array of responses
        #[arg(long)]
        responses: PathBuf,

        /// Custom catalog TOML (built-in catalog when omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, html, markdown, all (comma-separated)
        #[arg(long)]
        format: Option<String>,

        /// Respondent name recorded on the result
        #[arg(long)]
        respondent: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Take the assessment interactively
    Take {
        /// Custom catalog TOML (built-in catalog when omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, html, markdown, all (comma-separated)
        #[arg(long)]
        format: Option<String>,

        /// Respondent name recorded on the result
        #[arg(long)]
        respondent: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a catalog and, optionally, a responses file
    Validate {
        /// Catalog TOML file or directory (built-in catalog when omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Responses JSON to check against the catalog
        #[arg(long)]
        responses: Option<PathBuf>,
    },

    /// List catalog categories and questions
    Catalog {
        /// Custom catalog TOML (built-in catalog when omitted)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Also list every question
        #[arg(long)]
        questions: bool,
    },

    /// Create starter config and example responses
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("readiness=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            responses,
            catalog,
            output,
            format,
            respondent,
            config,
        } => commands::score::execute(responses, catalog, output, format, respondent, config),
        Commands::Take {
            catalog,
            output,
            format,
            respondent,
            config,
        } => commands::take::execute(catalog, output, format, respondent, config),
        Commands::Validate { catalog, responses } => {
            commands::validate::execute(catalog, responses)
        }
        Commands::Catalog { catalog, questions } => commands::catalog::execute(catalog, questions),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
