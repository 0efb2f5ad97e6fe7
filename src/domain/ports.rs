use crate::domain::model::{
    BoardMembership, CreateBoardMembershipOptions, CreateLabelOptions, CreateListOptions, Label,
    List,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// 對 Planka API 發出單一請求，回傳原始 JSON
#[async_trait]
pub trait PlankaRequest: Send + Sync {
    async fn request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> Result<Value>;

    async fn get(&self, path: &str) -> Result<Value> {
        self.request(HttpMethod::Get, path, None).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        self.request(HttpMethod::Post, path, Some(body)).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<Value> {
        self.request(HttpMethod::Patch, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.request(HttpMethod::Delete, path, None).await
    }
}

/// 建立看板後的佈建步驟所依賴的外部資源操作
#[async_trait]
pub trait BoardCollaborators: Send + Sync {
    async fn admin_user_id(&self) -> Result<Option<String>>;

    async fn create_board_membership(
        &self,
        options: CreateBoardMembershipOptions,
    ) -> Result<BoardMembership>;

    async fn create_list(&self, options: CreateListOptions) -> Result<List>;

    async fn create_label(&self, options: CreateLabelOptions) -> Result<Label>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn access_token(&self) -> Option<&str>;
    fn username(&self) -> Option<&str>;
    fn password(&self) -> Option<&str>;
    fn admin_identity(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}
