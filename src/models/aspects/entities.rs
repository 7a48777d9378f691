use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评价维度，例如“准时性”
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/aspect.ts")]
pub struct Aspect {
    pub id: i64,
    pub label: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
