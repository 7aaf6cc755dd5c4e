use clap::{Args, Parser, Subcommand};

use crate::api::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(
    name = "wti",
    version,
    about = "WebTranslateIt synchronization tool with support for multiple projects"
)]
pub struct Cli {
    /// Translation service URL
    #[arg(long, global = true, env = "WTI_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Verbose logging (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the wti_config.json configuration file
    Init {
        /// Project API key
        #[arg(short = 'k', long = "project-key", alias = "project_key")]
        project_key: Option<String>,

        /// Remove null values from pulled JSON files
        #[arg(long)]
        remove_null_values: bool,
    },

    /// Fetch and display project statistics
    Status(ProjectArg),

    /// Add a project to the configuration
    #[command(after_help = "Examples:\n  wti add-project -k 1234_abcd")]
    AddProject {
        /// Project API key
        #[arg(short = 'k', long = "project-key", alias = "project_key")]
        project_key: Option<String>,
    },

    /// Pull language files. Without --locales, every locale except the master is pulled.
    #[command(after_help = "Examples:\n  wti pull\n  wti pull -l fr\n  wti pull -l \"fr es da\"")]
    Pull {
        #[command(flatten)]
        project: ProjectArg,

        /// Space-separated locales to pull
        #[arg(short, long)]
        locales: Option<String>,
    },

    /// Push language files. Without --locales, every locale except the master is pushed.
    #[command(
        after_help = "Examples:\n  wti push\n  wti push --master\n  wti push -l fr\n  wti push -l \"fr es da\""
    )]
    Push {
        #[command(flatten)]
        project: ProjectArg,

        /// Space-separated locales to push
        #[arg(short, long)]
        locales: Option<String>,

        /// Only push the master locale
        #[arg(long)]
        master: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArg {
    /// Project key from the config to run the command for
    #[arg(short, long)]
    pub project: Option<String>,
}
