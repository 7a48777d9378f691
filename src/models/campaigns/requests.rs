use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

// 创建评价活动请求
//
// active 不填写时按“开始日期是否为今天”推导
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campaign.ts")]
pub struct CreateCampaignRequest {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_teacher_evaluation")]
    pub teacher_evaluation: bool,
    pub form_url: Option<String>,
    pub active: Option<bool>,
}

fn default_teacher_evaluation() -> bool {
    true
}

// 更新评价活动请求
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campaign.ts")]
pub struct UpdateCampaignRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub teacher_evaluation: Option<bool>,
    pub form_url: Option<String>,
    pub active: Option<bool>,
}

// 活动条目配置（维度 / 评分等级 / 问题通用）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campaign.ts")]
pub struct CampaignItem {
    pub id: i64,
    pub display_order: Option<i32>,
    pub active: Option<bool>,
}

impl CampaignItem {
    /// 未指定顺序时使用其在列表中的位置
    pub fn order_or(&self, position: usize) -> i32 {
        self.display_order.unwrap_or(position as i32 + 1)
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(true)
    }
}

// 替换活动条目配置，未提供的列表保持不变
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campaign.ts")]
pub struct CampaignItemsRequest {
    pub aspects: Option<Vec<CampaignItem>>,
    pub valuations: Option<Vec<CampaignItem>>,
    pub questions: Option<Vec<CampaignItem>>,
}
