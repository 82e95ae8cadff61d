use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use rulecheck::commands::check::{self, OutputFormat};
use rulecheck::commands::list;

#[derive(Parser)]
#[command(name = "rulecheck")]
#[command(about = "Structural linter for agent rule documents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every rule document under a rules root
    Check {
        /// Root directory of the rule tree
        root: PathBuf,

        /// Path to a linter configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List rule documents under a rules root
    List {
        /// Root directory of the rule tree
        root: PathBuf,

        /// Path to a linter configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("RULECHECK_LOG"))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            root,
            config,
            format,
        } => check::execute(&root, config.as_deref(), format),
        Commands::List { root, config } => list::execute(&root, config.as_deref()),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "rulecheck", &mut std::io::stdout());
            Ok(())
        }
    }
}
