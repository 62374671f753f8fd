//! Command-line surface of the hrdesk client.

use crate::commands;
use crate::error::HrDeskError;
use crate::logger;
use crate::state::AppState;

use client_core::config::{AppConfig, base_url_from_env, default_config_dir};
use client_core::{
    AnalysisFilter, ApiClient, FileTokenStore, InterviewFilter, MemoryTokenStore, TokenStore,
};
use models::{AnalysisCreate, InterviewStatus};

use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

const LOG_DIR_NAME: &str = "logs";

/// HR desk client: manage jobs, resumes, interviews and AI analyses.
#[derive(Debug, Parser)]
#[command(name = "hrdesk", version)]
pub struct Cli {
    /// API base URL, e.g. `http://localhost:8000/api/v1`. Overrides
    /// `HR_API_BASE_URL` and `config.json`.
    #[arg(long, global = true, value_name = "url")]
    pub base_url: Option<String>,

    /// Directory holding `config.json`, `tokens.json` and logs.
    #[arg(long, global = true, value_name = "path")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session.
    Login {
        username: String,
        #[arg(long, env = "HRDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account.
    Register {
        username: String,
        #[arg(long, env = "HRDESK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    #[command(subcommand)]
    Jobs(JobsCommand),
    #[command(subcommand)]
    Resumes(ResumesCommand),
    #[command(subcommand)]
    Interviews(InterviewsCommand),
    #[command(subcommand)]
    Analyses(AnalysesCommand),
}

#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    List,
    Get { id: i64 },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum ResumesCommand {
    List {
        #[arg(long)]
        job_id: Option<i64>,
    },
    Get {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum InterviewsCommand {
    List {
        #[arg(long)]
        job_id: Option<i64>,
        #[arg(long)]
        resume_id: Option<i64>,
        /// scheduled, completed or canceled
        #[arg(long, value_parser = parse_interview_status)]
        status: Option<InterviewStatus>,
    },
    Get {
        id: i64,
    },
    Delete {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum AnalysesCommand {
    List {
        #[arg(long)]
        job_id: Option<i64>,
        #[arg(long)]
        resume_id: Option<i64>,
    },
    /// Analyze a resume against its job.
    Create {
        #[arg(long)]
        job_id: i64,
        #[arg(long)]
        resume_id: i64,
        /// Re-run even when an analysis already exists.
        #[arg(long)]
        force: bool,
    },
}

pub fn parse_interview_status(raw: &str) -> Result<InterviewStatus, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "scheduled" => Ok(InterviewStatus::Scheduled),
        "completed" => Ok(InterviewStatus::Completed),
        "canceled" | "cancelled" => Ok(InterviewStatus::Canceled),
        other => Err(format!(
            "unknown interview status {other:?} (expected scheduled, completed or canceled)"
        )),
    }
}

/// Build the shared state from configuration: base URL, timeout and token store.
pub fn build_state(cli: &Cli, config_dir: &Path) -> Result<AppState, HrDeskError> {
    let config = AppConfig::load(config_dir)?;
    let env_override = cli.base_url.clone().or_else(base_url_from_env);
    let base_url = config.resolve_base_url(env_override.as_deref());

    let store: Arc<dyn TokenStore> = if config.session.persist_tokens {
        Arc::new(FileTokenStore::in_dir(config_dir))
    } else {
        debug!("Token persistence disabled, session lasts for this run only");
        Arc::new(MemoryTokenStore::new())
    };

    let client = ApiClient::with_timeout(&base_url, store, config.api.timeout())?;
    info!("Using API at {}", client.base_url());

    Ok(AppState::new(client))
}

/// Run one CLI invocation end to end.
pub async fn run(cli: Cli) -> Result<(), HrDeskError> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => default_config_dir()?,
    };

    logger::initialize(&config_dir.join(LOG_DIR_NAME))?;

    let state = build_state(&cli, &config_dir)?;
    dispatch(&state, cli.command).await
}

pub async fn dispatch(state: &AppState, command: Command) -> Result<(), HrDeskError> {
    match command {
        Command::Login { username, password } => {
            print_json(&commands::session::login(state, &username, &password).await?)
        }
        Command::Register { username, password } => {
            print_json(&commands::session::register(state, &username, &password).await?)
        }
        Command::Logout => {
            commands::session::logout(state).await?;
            print_json(&serde_json::json!({"ok": true}))
        }
        Command::Whoami => match commands::session::current_user(state).await? {
            Some(user) => print_json(&user),
            None => Err(HrDeskError::unauthenticated("Not logged in")),
        },
        Command::Jobs(JobsCommand::List) => print_json(&commands::jobs::list_jobs(state).await?),
        Command::Jobs(JobsCommand::Get { id }) => {
            print_json(&commands::jobs::get_job(state, id).await?)
        }
        Command::Jobs(JobsCommand::Delete { id }) => {
            print_json(&commands::jobs::delete_job(state, id).await?)
        }
        Command::Resumes(ResumesCommand::List { job_id }) => {
            print_json(&commands::resumes::list_resumes(state, job_id).await?)
        }
        Command::Resumes(ResumesCommand::Get { id }) => {
            print_json(&commands::resumes::get_resume(state, id).await?)
        }
        Command::Interviews(InterviewsCommand::List {
            job_id,
            resume_id,
            status,
        }) => {
            let filter = InterviewFilter {
                job_id,
                resume_id,
                status,
            };
            print_json(&commands::interviews::list_interviews(state, &filter).await?)
        }
        Command::Interviews(InterviewsCommand::Get { id }) => {
            print_json(&commands::interviews::get_interview(state, id).await?)
        }
        Command::Interviews(InterviewsCommand::Delete { id }) => {
            print_json(&commands::interviews::delete_interview(state, id).await?)
        }
        Command::Analyses(AnalysesCommand::List { job_id, resume_id }) => {
            let filter = AnalysisFilter { job_id, resume_id };
            print_json(&commands::analyses::list_analyses(state, &filter).await?)
        }
        Command::Analyses(AnalysesCommand::Create {
            job_id,
            resume_id,
            force,
        }) => {
            let request = AnalysisCreate {
                job_id,
                resume_id,
                force: force.then_some(true),
            };
            print_json(&commands::analyses::create_analysis(state, &request).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), HrDeskError> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| HrDeskError::app(format!("Failed to render output: {e}")))?;

    let mut out = stdout().lock();
    writeln!(out, "{rendered}")
        .map_err(|e| HrDeskError::app(format!("Failed to write output: {e}")))
}
