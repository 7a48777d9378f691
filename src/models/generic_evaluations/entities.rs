use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通用问卷答卷：每个 (活动, 学生) 一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/generic_evaluation.ts")]
pub struct GenericEvaluation {
    pub id: i64,
    pub campaign_id: i64,
    pub student_id: String,
    pub general_comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
