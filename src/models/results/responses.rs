use serde::Serialize;
use ts_rs::TS;

/// 活动总览
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/results.ts")]
pub struct CampaignDashboardResponse {
    pub campaign_id: i64,
    pub total_evaluations: i64,
    pub submitted_evaluations: i64,
    pub pending_evaluations: i64,
    pub submission_rate: f64,
    pub generic_submissions: i64,
    pub distinct_students: i64,
    pub distinct_teachers: i64,
}

/// 单个维度的得分
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/results.ts")]
pub struct AspectResult {
    pub aspect_id: i64,
    pub label: String,
    pub responses: i64,
    pub average_weight: Option<f64>,
}

/// 教师在某活动中的结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/results.ts")]
pub struct TeacherResultsResponse {
    pub campaign_id: i64,
    pub teacher_id: String,
    pub submitted_evaluations: i64,
    pub overall_average: Option<f64>,
    pub aspects: Vec<AspectResult>,
    pub comments: Vec<String>,
}
