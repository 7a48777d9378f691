use serde::Deserialize;
use ts_rs::TS;

// 创建评分等级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/valuation.ts")]
pub struct CreateValuationRequest {
    pub label: String,
    pub weight: f64,
    pub description: Option<String>,
}

// 更新评分等级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/valuation.ts")]
pub struct UpdateValuationRequest {
    pub label: Option<String>,
    pub weight: Option<f64>,
    pub description: Option<String>,
}
