use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::descriptor::{read_config, ProjectDescriptor};
use crate::generator::scaffold_project;

/// Command-line interface for goforge
///
/// Scaffolds Go web projects from embedded templates and forwards free-form
/// questions to the configured chat model.
#[derive(Parser)]
#[command(name = "goforge")]
#[command(about = "Go web project scaffolder", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for goforge
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new Go web project
    New {
        /// Project name; becomes the Go module name and the output directory
        name: Option<String>,

        /// Port the generated service listens on
        #[arg(short, long, default_value = "8080")]
        port: String,

        /// Router framework (gin, chi, echo, fiber, mux)
        #[arg(short, long)]
        router: Option<String>,

        /// Database add-on (postgres, mysql, mongodb, sqlite, cockroachdb, mariadb)
        #[arg(short, long)]
        db: Option<String>,

        /// Entity names to fan handlers and models out over (comma-separated or repeated)
        #[arg(short, long, num_args = 1.., value_delimiter = ',')]
        entity: Vec<String>,

        /// YAML config file; file values override same-purpose flags
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Answer prompts instead of passing flags
        #[arg(short, long, default_value_t = false)]
        interactive: bool,
    },
    /// Ask the configured chat model a question
    Ai {
        /// The question to send
        #[arg(short = 'm', long)]
        prompt: String,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The config file cannot be read or parsed
/// - The descriptor fails validation (missing project name)
/// - Any render job fails
/// - The chat backend is unreachable or misconfigured
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::New {
            name,
            port,
            router,
            db,
            entity,
            config,
            interactive,
        } => {
            let mut descriptor = if interactive {
                let stdin = std::io::stdin();
                super::wizard::collect_from(stdin.lock(), std::io::stdout())?
            } else {
                ProjectDescriptor::from_flags(name, port, router, db, entity)
            };
            if let Some(path) = config {
                let cfg = read_config(&path)?;
                descriptor.merge_config(&cfg);
            }
            scaffold_project(&descriptor)?;
            Ok(())
        }
        Commands::Ai { prompt } => {
            let reply = crate::chat::ask(&prompt)?;
            println!("{reply}");
            Ok(())
        }
    }
}
