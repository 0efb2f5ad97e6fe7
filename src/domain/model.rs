use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 預設排序間隔，Planka 以 65535 的倍數作為稀疏排序鍵
pub const POSITION_GAP: f64 = 65535.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub position: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub board_id: String,
    pub name: String,
    pub position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LabelColor {
    BerryRed,
    PumpkinOrange,
    LagoonBlue,
    PinkTulip,
    LightMud,
    OrangePeel,
    BrightMoss,
    AntiqueBlue,
    DarkGranite,
    LaguneBlue,
    SunnyGrass,
    MorningSky,
    LightOrange,
    MidnightBlue,
    TankGreen,
    GunMetal,
    WetMoss,
    RedBurgundy,
    LightConcrete,
    AppleGreen,
    DesertSand,
    NavyBlue,
    EggYellow,
    CoralGreen,
    LightCocoa,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub id: String,
    pub board_id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub color: LabelColor,
    pub position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardMembershipRole {
    Editor,
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardMembership {
    pub id: String,
    pub board_id: String,
    pub user_id: String,
    pub role: BoardMembershipRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_comment: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

fn default_position() -> f64 {
    POSITION_GAP
}

/// 建立看板的請求參數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardOptions {
    pub project_id: String,
    pub name: String,
    #[serde(default = "default_position")]
    pub position: f64,
}

impl CreateBoardOptions {
    pub fn new(project_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            name: name.into(),
            position: POSITION_GAP,
        }
    }

    pub fn with_position(mut self, position: f64) -> Self {
        self.position = position;
        self
    }
}

/// 部分更新；專案 ID 不屬於可修改欄位，因此此結構根本沒有該欄位
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<f64>,
}

impl UpdateBoardOptions {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none()
    }
}

impl From<CreateBoardOptions> for UpdateBoardOptions {
    fn from(options: CreateBoardOptions) -> Self {
        Self {
            name: Some(options.name),
            position: Some(options.position),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListOptions {
    pub board_id: String,
    pub name: String,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLabelOptions {
    pub board_id: String,
    pub name: String,
    pub color: LabelColor,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardMembershipOptions {
    pub board_id: String,
    pub user_id: String,
    pub role: BoardMembershipRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBoardResult {
    pub success: bool,
}
