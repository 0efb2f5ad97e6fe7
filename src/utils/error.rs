use thiserror::Error;

/// 回應結構驗證失敗
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Response validation failed for {shape}: {reason}")]
pub struct ValidationError {
    pub shape: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(shape: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum PlankaError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Planka responded with HTTP {status}: {message}")]
    HttpStatusError { status: u16, message: String },

    #[error("Authentication failed: {message}")]
    AuthenticationError { message: String },

    #[error(transparent)]
    ValidationError(#[from] ValidationError),

    #[error("Invalid input for {field}: {reason}")]
    InvalidInputError { field: String, reason: String },

    #[error("Failed to create board: {source}")]
    BoardCreationError {
        #[source]
        source: Box<PlankaError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用者輸入或設定問題
    Low,
    /// 遠端服務問題，可重試
    Medium,
    /// 回應結構不符，需要人工檢查
    High,
}

impl PlankaError {
    /// 包裝建立看板時的底層錯誤
    pub fn board_creation(source: PlankaError) -> Self {
        PlankaError::BoardCreationError {
            source: Box::new(source),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PlankaError::BoardCreationError { source } => source.severity(),
            PlankaError::InvalidInputError { .. }
            | PlankaError::MissingConfigError { .. }
            | PlankaError::InvalidConfigValueError { .. }
            | PlankaError::ConfigValidationError { .. }
            | PlankaError::AuthenticationError { .. } => ErrorSeverity::Low,
            PlankaError::ApiError(_)
            | PlankaError::HttpStatusError { .. }
            | PlankaError::IoError(_) => ErrorSeverity::Medium,
            PlankaError::ValidationError(_) | PlankaError::SerializationError(_) => {
                ErrorSeverity::High
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlankaError::BoardCreationError { source } => {
                format!("Board could not be created: {}", source.user_friendly_message())
            }
            PlankaError::HttpStatusError { status: 404, .. } => {
                "The requested resource does not exist on the Planka server".to_string()
            }
            PlankaError::HttpStatusError { status: 401 | 403, .. } => {
                "The Planka server rejected the credentials".to_string()
            }
            PlankaError::ApiError(_) => "Could not reach the Planka server".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlankaError::BoardCreationError { source } => source.recovery_suggestion(),
            PlankaError::ApiError(_) => "Check PLANKA_BASE_URL and network connectivity",
            PlankaError::HttpStatusError { status: 401 | 403, .. }
            | PlankaError::AuthenticationError { .. } => {
                "Check PLANKA_AGENT_EMAIL / PLANKA_AGENT_PASSWORD or PLANKA_ACCESS_TOKEN"
            }
            PlankaError::HttpStatusError { .. } => "Verify the ids passed on the command line",
            PlankaError::ValidationError(_) | PlankaError::SerializationError(_) => {
                "The server response has an unexpected shape; check the Planka server version"
            }
            PlankaError::InvalidInputError { .. } => "Correct the command arguments and retry",
            PlankaError::IoError(_) => "Check file permissions and paths",
            PlankaError::MissingConfigError { .. }
            | PlankaError::InvalidConfigValueError { .. }
            | PlankaError::ConfigValidationError { .. } => {
                "Review the configuration file or environment variables"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PlankaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_creation_wraps_message() {
        let err = PlankaError::board_creation(PlankaError::HttpStatusError {
            status: 500,
            message: "boom".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Failed to create board: Planka responded with HTTP 500: boom"
        );
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: PlankaError = ValidationError::new("BoardResponse", "missing field `item`").into();
        assert_eq!(
            err.to_string(),
            "Response validation failed for BoardResponse: missing field `item`"
        );
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
