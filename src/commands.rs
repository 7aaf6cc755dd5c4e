//! Command handlers.
//!
//! Configuration and validation errors propagate and end the process with
//! exit code 1. Remote failures during `status`, `pull` and `push` are
//! reported and the command returns normally; per-file sync failures never
//! change the exit code.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use crate::api::HttpApi;
use crate::cli::{Cli, Commands, ProjectArg};
use crate::config::{GlobalConfig, ProjectContext};
use crate::error::WtiError;
use crate::output::{self, ConsoleProgress, Spinner};
use crate::project;
use crate::status;
use crate::sync::{SyncDirection, SyncEngine, SyncRequest};

/// Everything a command needs, built once in `main`.
pub struct Invocation {
    pub api_url: String,
    /// Directory holding the config; remote file names are relative to it
    pub work_dir: PathBuf,
}

impl Invocation {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let work_dir = std::env::current_dir().context("Failed to read working directory")?;
        Ok(Self {
            api_url: cli.api_url.clone(),
            work_dir,
        })
    }

    fn api_for(&self, api_key: &str) -> Result<HttpApi> {
        Ok(HttpApi::new(&self.api_url, api_key)?)
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let inv = Invocation::from_cli(&cli)?;

    match cli.command {
        Commands::Init {
            project_key,
            remove_null_values,
        } => {
            let api_key = project_key.as_deref().unwrap_or_default();
            init(&inv, api_key, remove_null_values).await
        }
        Commands::AddProject { project_key } => {
            let mut config = GlobalConfig::load(&inv.work_dir)?;
            let api_key = project_key.as_deref().unwrap_or_default();
            add_project(&inv, &mut config, api_key).await
        }
        Commands::Status(project) => {
            let config = GlobalConfig::load(&inv.work_dir)?;
            let ctx = select(&config, &project)?;
            show_status(&inv, &ctx).await
        }
        Commands::Pull { project, locales } => {
            let config = GlobalConfig::load(&inv.work_dir)?;
            let ctx = select(&config, &project)?;
            let request = SyncRequest::locales(SyncRequest::parse_locales(locales.as_deref()));
            sync(&inv, &config, &ctx, SyncDirection::Pull, &request).await
        }
        Commands::Push {
            project,
            locales,
            master,
        } => {
            let config = GlobalConfig::load(&inv.work_dir)?;
            let ctx = select(&config, &project)?;
            let request = SyncRequest {
                locales: SyncRequest::parse_locales(locales.as_deref()),
                master_only: master,
            };
            sync(&inv, &config, &ctx, SyncDirection::Push, &request).await
        }
    }
}

fn select(config: &GlobalConfig, project: &ProjectArg) -> Result<ProjectContext> {
    Ok(config.select_project(project.project.as_deref())?)
}

async fn init(inv: &Invocation, api_key: &str, remove_null_values: bool) -> Result<()> {
    let api = inv.api_for(api_key.trim())?;
    let registered =
        project::init_config(&api, &inv.work_dir, api_key, remove_null_values).await?;
    println!(
        "{}",
        format!(
            "Config file written successfully with project \"{}\"",
            registered.name
        )
        .green()
    );
    Ok(())
}

async fn add_project(inv: &Invocation, config: &mut GlobalConfig, api_key: &str) -> Result<()> {
    let api = inv.api_for(api_key.trim())?;
    let registered = project::add_project(&api, config, &inv.work_dir, api_key).await?;
    println!(
        "{}",
        format!(
            "Project \"{}\" added to config as {}",
            registered.name, registered.key
        )
        .green()
    );
    Ok(())
}

async fn show_status(inv: &Invocation, ctx: &ProjectContext) -> Result<()> {
    let api = inv.api_for(&ctx.api_key)?;
    let spinner = Spinner::start(format!(
        "Loading status for {}",
        ctx.display_name().green()
    ));

    match status::project_status(&api).await {
        Ok(statuses) => {
            spinner.succeed(format!("Status for {}:", ctx.display_name().green()));
            output::print_status(&statuses);
        }
        Err(e) => {
            debug!(project = %ctx.key, error = %e, "Status fetch failed");
            spinner.fail(format!(
                "Failed to load status for {}: {}",
                ctx.display_name(),
                e
            ));
        }
    }
    Ok(())
}

async fn sync(
    inv: &Invocation,
    config: &GlobalConfig,
    ctx: &ProjectContext,
    direction: SyncDirection,
    request: &SyncRequest,
) -> Result<()> {
    let api = inv.api_for(&ctx.api_key)?;
    let progress = ConsoleProgress::new();
    let engine = SyncEngine::new(
        &api,
        inv.work_dir.clone(),
        config.remove_null_values,
        &progress,
    );

    let result = match direction {
        SyncDirection::Pull => engine.pull(request).await,
        SyncDirection::Push => engine.push(request).await,
    };

    match result {
        Ok(report) => output::print_report(&report),
        Err(e) => report_resolve_failure(ctx, direction, &e),
    }
    Ok(())
}

/// Resolving the file set failed: nothing was synced.
fn report_resolve_failure(ctx: &ProjectContext, direction: SyncDirection, err: &WtiError) {
    debug!(project = %ctx.key, error = %err, "Could not resolve project files");
    eprintln!(
        "{} {} aborted for {}: {}",
        "✖".red(),
        direction.as_str(),
        ctx.display_name().bold(),
        err
    );
}
