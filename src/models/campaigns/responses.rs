use super::entities::{Campaign, ConfiguredAspect, ConfiguredQuestion, ConfiguredValuation};
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campaign.ts")]
pub struct CampaignListResponse {
    pub items: Vec<Campaign>,
}

// 评价表单：活动 + 启用的维度、评分等级、问题
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campaign.ts")]
pub struct EvaluationFormResponse {
    #[serde(rename = "configuracion")]
    pub campaign: Campaign,
    #[serde(rename = "aspectos")]
    pub aspects: Vec<ConfiguredAspect>,
    #[serde(rename = "valoraciones")]
    pub valuations: Vec<ConfiguredValuation>,
    #[serde(rename = "preguntas")]
    pub questions: Vec<ConfiguredQuestion>,
}

// 活动条目配置（管理视图，包含未启用条目）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campaign.ts")]
pub struct CampaignItemsResponse {
    pub aspects: Vec<ConfiguredAspect>,
    pub valuations: Vec<ConfiguredValuation>,
    pub questions: Vec<ConfiguredQuestion>,
}
