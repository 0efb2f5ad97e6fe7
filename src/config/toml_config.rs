use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{PlankaError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub planka: PlankaSection,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlankaSection {
    pub base_url: String,
    pub access_token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub admin_email: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlankaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlankaError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PLANKA_AGENT_PASSWORD})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|logging| logging.json)
            .unwrap_or(false)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.planka.base_url.clone(),
            access_token: self.planka.access_token.clone(),
            username: self.planka.username.clone(),
            password: self.planka.password.clone(),
            admin_email: self.planka.admin_email.clone(),
            timeout_seconds: self.planka.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        // 未被替換的 ${VAR} 代表環境變數缺漏
        for (field, value) in [
            ("planka.base_url", Some(&self.planka.base_url)),
            ("planka.access_token", self.planka.access_token.as_ref()),
            ("planka.username", self.planka.username.as_ref()),
            ("planka.password", self.planka.password.as_ref()),
        ] {
            if let Some(value) = value {
                if let Some(caps) = env_var_pattern().captures(value) {
                    return Err(PlankaError::ConfigValidationError {
                        field: field.to_string(),
                        message: format!("Environment variable {} is not set", &caps[1]),
                    });
                }
            }
        }

        self.client_config().validate()
    }
}
