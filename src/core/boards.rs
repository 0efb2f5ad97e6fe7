use crate::core::provisioning::{provision_board, ProvisioningReport};
use crate::core::response::{decode_item, included_array};
use crate::domain::model::{Board, CreateBoardOptions, DeleteBoardResult, UpdateBoardOptions};
use crate::domain::ports::{BoardCollaborators, PlankaRequest};
use crate::utils::error::{PlankaError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_position, Validate};
use serde_json::json;

const BOARD_RESPONSE: &str = "BoardResponse";

impl Validate for CreateBoardOptions {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("projectId", &self.project_id)?;
        validate_non_empty_string("name", &self.name)?;
        validate_position("position", self.position)
    }
}

impl Validate for UpdateBoardOptions {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_non_empty_string("name", name)?;
        }
        if let Some(position) = self.position {
            validate_position("position", position)?;
        }
        Ok(())
    }
}

/// 看板 CRUD，建立時附帶預設內容佈建
pub struct BoardService<T: PlankaRequest, C: BoardCollaborators> {
    transport: T,
    collaborators: C,
}

impl<T: PlankaRequest, C: BoardCollaborators> BoardService<T, C> {
    pub fn new(transport: T, collaborators: C) -> Self {
        Self {
            transport,
            collaborators,
        }
    }

    pub fn collaborators(&self) -> &C {
        &self.collaborators
    }

    /// 建立看板並佈建預設內容，佈建失敗不影響回傳的看板
    pub async fn create_board(&self, options: CreateBoardOptions) -> Result<Board> {
        let (board, _report) = self.create_board_with_report(options).await?;
        Ok(board)
    }

    pub async fn create_board_with_report(
        &self,
        options: CreateBoardOptions,
    ) -> Result<(Board, ProvisioningReport)> {
        let board = self
            .create_board_only(&options)
            .await
            .map_err(PlankaError::board_creation)?;

        tracing::info!(
            "📋 Created board '{}' ({}) in project {}",
            board.name,
            board.id,
            board.project_id
        );

        let report = provision_board(&self.collaborators, &board.id).await;
        Ok((board, report))
    }

    async fn create_board_only(&self, options: &CreateBoardOptions) -> Result<Board> {
        options.validate()?;

        let path = format!("/api/projects/{}/boards", options.project_id);
        let body = json!({
            "name": options.name,
            "position": options.position,
        });
        let response = self.transport.post(&path, body).await?;
        Ok(decode_item(BOARD_RESPONSE, response)?)
    }

    /// 列出專案下的看板
    ///
    /// API 沒有以專案查詢看板的端點，只能從 `/api/projects` 的
    /// `included.boards` 過濾。任何錯誤或結構不符都回傳空陣列。
    pub async fn get_boards(&self, project_id: &str) -> Vec<Board> {
        let response = match self.transport.get("/api/projects").await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Project listing failed, returning no boards: {}", e);
                return Vec::new();
            }
        };

        let Some(all_boards) = included_array(&response, "boards") else {
            tracing::debug!("Project listing has no included.boards array");
            return Vec::new();
        };

        let mut dropped = 0;
        let boards: Vec<Board> = all_boards
            .iter()
            .filter(|board| {
                board.get("projectId").and_then(|id| id.as_str()) == Some(project_id)
            })
            .filter_map(|board| match serde_json::from_value::<Board>(board.clone()) {
                Ok(board) => Some(board),
                Err(e) => {
                    dropped += 1;
                    tracing::debug!("Skipping malformed board in project {}: {}", project_id, e);
                    None
                }
            })
            .collect();

        if dropped > 0 {
            tracing::warn!(
                "⚠️ Skipped {} malformed board(s) in project {}",
                dropped,
                project_id
            );
        }
        boards
    }

    pub async fn get_board(&self, id: &str) -> Result<Board> {
        validate_non_empty_string("id", id)?;
        let response = self.transport.get(&format!("/api/boards/{}", id)).await?;
        Ok(decode_item(BOARD_RESPONSE, response)?)
    }

    pub async fn update_board(&self, id: &str, options: UpdateBoardOptions) -> Result<Board> {
        validate_non_empty_string("id", id)?;
        options.validate()?;
        if options.is_empty() {
            tracing::debug!("Updating board {} with an empty patch", id);
        }

        let body = serde_json::to_value(&options)?;
        let response = self
            .transport
            .patch(&format!("/api/boards/{}", id), body)
            .await?;
        Ok(decode_item(BOARD_RESPONSE, response)?)
    }

    /// 刪除看板；不檢查回應內容
    pub async fn delete_board(&self, id: &str) -> Result<DeleteBoardResult> {
        validate_non_empty_string("id", id)?;
        self.transport
            .delete(&format!("/api/boards/{}", id))
            .await?;
        Ok(DeleteBoardResult { success: true })
    }
}
