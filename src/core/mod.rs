pub mod boards;
pub mod provisioning;
pub mod response;

pub use crate::domain::model::{
    Board, BoardMembership, BoardMembershipRole, CreateBoardOptions, DeleteBoardResult, Label,
    LabelColor, List, UpdateBoardOptions,
};
pub use crate::domain::ports::{BoardCollaborators, ConfigProvider, HttpMethod, PlankaRequest};
pub use crate::utils::error::Result;
