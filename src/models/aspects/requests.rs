use serde::Deserialize;
use ts_rs::TS;

// 创建评价维度请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/aspect.ts")]
pub struct CreateAspectRequest {
    pub label: String,
    pub description: Option<String>,
}

// 更新评价维度请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/aspect.ts")]
pub struct UpdateAspectRequest {
    pub label: Option<String>,
    pub description: Option<String>,
}
