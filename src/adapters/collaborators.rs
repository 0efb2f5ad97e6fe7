use crate::core::response::{decode_item, decode_items};
use crate::domain::model::{
    BoardMembership, CreateBoardMembershipOptions, CreateLabelOptions, CreateListOptions, Label,
    List, User,
};
use crate::domain::ports::{BoardCollaborators, PlankaRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::json;

/// 透過 Planka API 建立欄位、標籤與成員
pub struct HttpCollaborators<T: PlankaRequest> {
    transport: T,
    admin_identity: Option<String>,
}

impl<T: PlankaRequest> HttpCollaborators<T> {
    pub fn new(transport: T, admin_identity: Option<String>) -> Self {
        Self {
            transport,
            admin_identity,
        }
    }
}

/// 有設定管理員時以 email 或使用者名稱比對，比對不到或未設定則取第一位管理員
pub fn find_admin<'a>(users: &'a [User], identity: Option<&str>) -> Option<&'a User> {
    identity
        .and_then(|identity| {
            users.iter().find(|user| {
                [user.email.as_deref(), user.username.as_deref()]
                    .into_iter()
                    .flatten()
                    .any(|candidate| candidate.eq_ignore_ascii_case(identity))
            })
        })
        .or_else(|| users.iter().find(|user| user.is_admin))
}

#[async_trait]
impl<T: PlankaRequest> BoardCollaborators for HttpCollaborators<T> {
    async fn admin_user_id(&self) -> Result<Option<String>> {
        let response = self.transport.get("/api/users").await?;
        let users: Vec<User> = decode_items("UsersResponse", response)?;

        let admin = find_admin(&users, self.admin_identity.as_deref());
        if admin.is_none() {
            tracing::debug!(
                "No admin user matched {:?} among {} users",
                self.admin_identity,
                users.len()
            );
        }
        Ok(admin.map(|user| user.id.clone()))
    }

    async fn create_board_membership(
        &self,
        options: CreateBoardMembershipOptions,
    ) -> Result<BoardMembership> {
        let path = format!("/api/boards/{}/memberships", options.board_id);
        let body = json!({
            "userId": options.user_id,
            "role": options.role,
        });
        let response = self.transport.post(&path, body).await?;
        Ok(decode_item("BoardMembershipResponse", response)?)
    }

    async fn create_list(&self, options: CreateListOptions) -> Result<List> {
        let path = format!("/api/boards/{}/lists", options.board_id);
        let body = json!({
            "name": options.name,
            "position": options.position,
        });
        let response = self.transport.post(&path, body).await?;
        Ok(decode_item("ListResponse", response)?)
    }

    async fn create_label(&self, options: CreateLabelOptions) -> Result<Label> {
        let path = format!("/api/boards/{}/labels", options.board_id);
        let body = json!({
            "name": options.name,
            "color": options.color,
            "position": options.position,
        });
        let response = self.transport.post(&path, body).await?;
        Ok(decode_item("LabelResponse", response)?)
    }
}
