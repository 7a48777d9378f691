use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师评价：每个 (活动, 学生, 课程) 一条，学生需要完成的最小单位
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Evaluation {
    pub id: i64,
    pub campaign_id: i64,
    pub student_id: String,
    pub teacher_id: String,
    pub teacher_name: Option<String>,
    pub course_code: String,
    pub course_name: Option<String>,
    pub general_comment: Option<String>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    // 由 submitted_at 推导，方便前端直接使用
    pub submitted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 评价明细：每个 (评价, 维度) 一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationDetail {
    pub id: i64,
    pub evaluation_id: i64,
    pub aspect_id: i64,
    pub valuation_id: i64,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 待创建的评价（来自花名册的一行）
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvaluation {
    pub teacher_id: String,
    pub teacher_name: Option<String>,
    pub course_code: String,
    pub course_name: Option<String>,
}
