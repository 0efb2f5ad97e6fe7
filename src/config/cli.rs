use crate::config::toml_config::TomlConfig;
use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{PlankaError, Result};
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "planka-boards")]
#[command(about = "Manage Planka boards and provision them with default lists and labels")]
pub struct Cli {
    /// TOML configuration file; takes precedence over the connection flags below
    #[arg(long, env = "PLANKA_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "PLANKA_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "PLANKA_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    #[arg(long, env = "PLANKA_AGENT_EMAIL")]
    pub username: Option<String>,

    #[arg(long, env = "PLANKA_AGENT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, env = "PLANKA_ADMIN_EMAIL")]
    pub admin_email: Option<String>,

    #[arg(long, env = "PLANKA_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a board and provision default lists, labels and admin membership
    Create {
        #[arg(long)]
        project_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        position: Option<f64>,
    },
    /// List boards of a project
    List {
        #[arg(long)]
        project_id: String,
    },
    /// Show a single board
    Get {
        #[arg(long)]
        id: String,
    },
    /// Rename or reposition a board
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        position: Option<f64>,
    },
    /// Delete a board
    Delete {
        #[arg(long)]
        id: String,
    },
}

/// CLI 最終使用的設定與日誌選項
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub client: ClientConfig,
    pub verbose: bool,
    pub log_json: bool,
}

impl Cli {
    pub fn resolve(&self) -> Result<ResolvedSettings> {
        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            // 未替換的 ${VAR} 只能在這裡被偵測
            file.validate()?;
            return Ok(ResolvedSettings {
                client: file.client_config(),
                verbose: self.verbose || file.verbose(),
                log_json: self.log_json || file.json_logs(),
            });
        }

        let base_url = self
            .base_url
            .clone()
            .ok_or_else(|| PlankaError::MissingConfigError {
                field: "base_url".to_string(),
            })?;

        Ok(ResolvedSettings {
            client: ClientConfig {
                base_url,
                access_token: self.access_token.clone(),
                username: self.username.clone(),
                password: self.password.clone(),
                admin_email: self.admin_email.clone(),
                timeout_seconds: self.timeout_seconds,
            },
            verbose: self.verbose,
            log_json: self.log_json,
        })
    }
}
