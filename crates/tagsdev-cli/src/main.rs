mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::up::UpArgs;

#[derive(Parser)]
#[command(name = "tagsdev", about = "Developer workflow commands for the Tags Drive backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the Docker image and start a container
    Up(UpArgs),
    /// Compile the Go backend binary and install it
    Build {
        /// Where to install the compiled binary (default: bin/tags-drive)
        #[arg(long)]
        output: Option<String>,
    },
    /// Load the env file and run the backend with those variables
    Run {
        /// Env file to load (default: scripts/run/run.env)
        #[arg(long)]
        env_file: Option<PathBuf>,
        /// Backend command, overriding the configured one
        #[arg(trailing_var_arg = true)]
        command: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Up(args) => commands::up(args).await?,
        Commands::Build { output } => commands::build(output).await?,
        Commands::Run { env_file, command } => commands::run(env_file, command).await?,
    }

    Ok(())
}
