pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{Cli, Command};

pub use crate::adapters::{collaborators::HttpCollaborators, connect, http::HttpTransport, HttpBoardService};
pub use crate::config::{toml_config::TomlConfig, ClientConfig};
pub use crate::core::{boards::BoardService, provisioning::ProvisioningReport};
pub use crate::domain::model::{Board, CreateBoardOptions, DeleteBoardResult, UpdateBoardOptions};
pub use crate::utils::error::{PlankaError, Result, ValidationError};
