use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(name = "waypoint")]
#[command(about = "Waypoint - learning journeys from agent personas", long_about = None)]
struct Cli {
    /// Enable debug logging for the waypoint crates
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the agent roster, or add and edit agents
    Agents {
        /// JSON file with an array of agent profiles (starter roster when omitted)
        #[arg(long, global = true)]
        profiles: Option<PathBuf>,

        #[command(subcommand)]
        action: Option<AgentAction>,
    },
    /// Print the generation prompt without calling the completion endpoint
    Prompt {
        #[command(flatten)]
        selection: commands::Selection,
    },
    /// Generate a learning journey
    Generate {
        #[command(flatten)]
        selection: commands::Selection,

        /// Deadline for the completion call, in seconds
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Directory holding config.toml and secret.json
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },
    /// Run a stored completion text through extraction, validation and URL sanitization
    Interpret {
        /// File containing the raw completion text
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Subcommand)]
enum AgentAction {
    /// Add an agent to the profiles file
    Add {
        #[command(flatten)]
        form: commands::agents::ProfileForm,
    },
    /// Edit an agent in the profiles file
    Edit {
        /// Id of the agent to edit
        id: String,

        #[command(flatten)]
        form: commands::agents::ProfileForm,
    },
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "waypoint=debug"
    } else {
        "waypoint=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Agents { profiles, action } => match action {
            None => commands::agents::list(profiles.as_deref())?,
            Some(AgentAction::Add { form }) => {
                commands::agents::add(profiles.as_deref(), form)?;
            }
            Some(AgentAction::Edit { id, form }) => {
                commands::agents::edit(profiles.as_deref(), &id, form)?
            }
        },
        Commands::Prompt { selection } => commands::prompt::print(&selection)?,
        Commands::Generate {
            selection,
            timeout,
            format,
            config_dir,
        } => {
            commands::generate::run(&selection, timeout, format, config_dir.as_deref()).await?
        }
        Commands::Interpret { file, format } => commands::interpret::run(&file, format)?,
    }

    Ok(())
}
