use crate::domain::model::{
    BoardMembership, BoardMembershipRole, CreateBoardMembershipOptions, CreateLabelOptions,
    CreateListOptions, Label, LabelColor, List,
};
use crate::domain::ports::BoardCollaborators;
use crate::utils::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultList {
    pub name: &'static str,
    pub position: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelGroup {
    Priority,
    Type,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultLabel {
    pub group: LabelGroup,
    pub name: &'static str,
    pub color: LabelColor,
    pub position: f64,
}

/// 新看板的預設欄位，依序建立
pub const DEFAULT_LISTS: [DefaultList; 6] = [
    DefaultList { name: "Backlog", position: 65535.0 },
    DefaultList { name: "To Do", position: 131070.0 },
    DefaultList { name: "In Progress", position: 196605.0 },
    DefaultList { name: "On Hold", position: 262140.0 },
    DefaultList { name: "Review", position: 327675.0 },
    DefaultList { name: "Done", position: 393210.0 },
];

/// 新看板的預設標籤：優先度、類型、狀態三組
pub const DEFAULT_LABELS: [DefaultLabel; 11] = [
    DefaultLabel { group: LabelGroup::Priority, name: "P0: Critical", color: LabelColor::BerryRed, position: 65535.0 },
    DefaultLabel { group: LabelGroup::Priority, name: "P1: High", color: LabelColor::RedBurgundy, position: 131070.0 },
    DefaultLabel { group: LabelGroup::Priority, name: "P2: Medium", color: LabelColor::PumpkinOrange, position: 196605.0 },
    DefaultLabel { group: LabelGroup::Priority, name: "P3: Low", color: LabelColor::SunnyGrass, position: 262140.0 },
    DefaultLabel { group: LabelGroup::Type, name: "Bug", color: LabelColor::CoralGreen, position: 327675.0 },
    DefaultLabel { group: LabelGroup::Type, name: "Feature", color: LabelColor::LagoonBlue, position: 393210.0 },
    DefaultLabel { group: LabelGroup::Type, name: "Enhancement", color: LabelColor::BrightMoss, position: 458745.0 },
    DefaultLabel { group: LabelGroup::Type, name: "Documentation", color: LabelColor::LightOrange, position: 524280.0 },
    DefaultLabel { group: LabelGroup::Status, name: "Blocked", color: LabelColor::MidnightBlue, position: 589815.0 },
    DefaultLabel { group: LabelGroup::Status, name: "Needs Info", color: LabelColor::DesertSand, position: 655350.0 },
    DefaultLabel { group: LabelGroup::Status, name: "Ready", color: LabelColor::EggYellow, position: 720885.0 },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningFailure {
    pub step: String,
    pub error: String,
}

impl fmt::Display for ProvisioningFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step, self.error)
    }
}

/// 佈建結果摘要；失敗只記錄，不影響看板本身
#[derive(Debug, Clone, Default)]
pub struct ProvisioningReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failures: Vec<ProvisioningFailure>,
    pub membership: Option<BoardMembership>,
    pub lists: Vec<List>,
    pub labels: Vec<Label>,
}

impl ProvisioningReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 盡力而為的批次：逐一記錄每個步驟的結果，失敗寫入日誌後繼續
#[derive(Debug)]
pub struct BestEffortBatch {
    context: String,
    attempted: usize,
    succeeded: usize,
    failures: Vec<ProvisioningFailure>,
}

impl BestEffortBatch {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            attempted: 0,
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    pub fn record<T>(&mut self, step: impl Into<String>, result: Result<T>) -> Option<T> {
        self.attempted += 1;
        match result {
            Ok(value) => {
                self.succeeded += 1;
                Some(value)
            }
            Err(e) => {
                self.fail(step, e.to_string());
                None
            }
        }
    }

    /// 步驟無法執行（例如找不到管理員）時記為失敗
    pub fn skip(&mut self, step: impl Into<String>, reason: impl Into<String>) {
        self.attempted += 1;
        self.fail(step, reason.into());
    }

    fn fail(&mut self, step: impl Into<String>, error: String) {
        let step = step.into();
        tracing::warn!("⚠️ {}: {} failed: {}", self.context, step, error);
        self.failures.push(ProvisioningFailure { step, error });
    }

    pub fn failures(&self) -> &[ProvisioningFailure] {
        &self.failures
    }

    pub fn finish(self) -> ProvisioningReport {
        ProvisioningReport {
            attempted: self.attempted,
            succeeded: self.succeeded,
            failures: self.failures,
            ..ProvisioningReport::default()
        }
    }
}

/// 依序佈建：管理員成員 → 預設欄位 → 預設標籤
///
/// 每個請求都引用剛建立的看板 ID，一次只送出一個。
pub async fn provision_board<C>(collaborators: &C, board_id: &str) -> ProvisioningReport
where
    C: BoardCollaborators + ?Sized,
{
    let mut batch = BestEffortBatch::new(format!("board {}", board_id));

    let membership = match collaborators.admin_user_id().await {
        Ok(Some(user_id)) => {
            let result = collaborators
                .create_board_membership(CreateBoardMembershipOptions {
                    board_id: board_id.to_string(),
                    user_id,
                    role: BoardMembershipRole::Editor,
                })
                .await;
            batch.record("admin membership", result)
        }
        Ok(None) => {
            batch.skip("admin membership", "Admin user ID not found");
            None
        }
        Err(e) => {
            batch.record::<BoardMembership>("admin membership", Err(e));
            None
        }
    };

    let mut lists = Vec::with_capacity(DEFAULT_LISTS.len());
    for list in DEFAULT_LISTS {
        let result = collaborators
            .create_list(CreateListOptions {
                board_id: board_id.to_string(),
                name: list.name.to_string(),
                position: list.position,
            })
            .await;
        if let Some(created) = batch.record(format!("list '{}'", list.name), result) {
            lists.push(created);
        }
    }

    let mut labels = Vec::with_capacity(DEFAULT_LABELS.len());
    for label in DEFAULT_LABELS {
        let result = collaborators
            .create_label(CreateLabelOptions {
                board_id: board_id.to_string(),
                name: label.name.to_string(),
                color: label.color,
                position: label.position,
            })
            .await;
        if let Some(created) = batch.record(format!("label '{}'", label.name), result) {
            labels.push(created);
        }
    }

    let report = ProvisioningReport {
        membership,
        lists,
        labels,
        ..batch.finish()
    };

    if report.is_complete() {
        tracing::info!(
            "✅ Provisioned board {} with {} lists and {} labels",
            board_id,
            report.lists.len(),
            report.labels.len()
        );
    } else {
        tracing::warn!(
            "⚠️ Board {} provisioned partially: {}/{} steps succeeded",
            board_id,
            report.succeeded,
            report.attempted
        );
    }

    report
}
