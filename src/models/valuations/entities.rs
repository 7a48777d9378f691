use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评分等级中的一个分值点，例如 优秀 = 4
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/valuation.ts")]
pub struct ValuationScaleEntry {
    pub id: i64,
    pub label: String,
    pub weight: f64,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
