use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use webhook_cli::commands::{config_cmd, webhook_cmd};
use webhook_cli::config::get_config_path;
use webhook_cli::errors::Error;

/// Webhook kit CLI: validate and encode webhook definitions
#[derive(Parser)]
#[command(name = "webhook-kit")]
#[command(about = "Validate and encode webhook definitions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a sample webhook configuration file
    Init {
        /// Path to save the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Validate every configured webhook
    Validate {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Print the stored form of every configured webhook
    Encode {
        /// Path to the configuration file
        #[arg(short, long)]
        path: Option<String>,

        /// Company id, overrides the configured owner
        #[arg(long)]
        company_id: Option<String>,

        /// Repository id, overrides the configured owner
        #[arg(long)]
        repository_id: Option<String>,
    },

    /// Show the CLI version
    Version,
}

fn run(command: Commands) -> Result<(), Error> {
    match command {
        Commands::Init { path } => {
            let config_path = get_config_path(path.as_deref());
            config_cmd::init_config(&config_path)?;
            println!("Configuration initialized at {:?}", config_path);
            Ok(())
        }
        Commands::Validate { path } => {
            webhook_cmd::execute_validate(&get_config_path(path.as_deref()))
        }
        Commands::Encode {
            path,
            company_id,
            repository_id,
        } => webhook_cmd::execute_encode(
            &get_config_path(path.as_deref()),
            company_id.as_deref(),
            repository_id.as_deref(),
        ),
        Commands::Version => {
            println!("webhook-kit version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env("WEBHOOK_KIT_LOG"))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        error!("Error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
