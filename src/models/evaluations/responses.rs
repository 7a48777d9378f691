use super::entities::{Evaluation, EvaluationDetail};
use crate::models::campaigns::entities::{ConfiguredAspect, ConfiguredValuation};
use serde::Serialize;
use ts_rs::TS;

// 初始化结果
//
// 教师评价活动返回本次新建的评价；通用问卷活动返回空列表并标记 isGenericEvaluation
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct BootstrapEvaluationsResponse {
    #[serde(rename = "evaluacionesCreadas")]
    pub created: Vec<Evaluation>,
    #[serde(rename = "aspectos")]
    pub aspects: Vec<ConfiguredAspect>,
    #[serde(rename = "valoraciones")]
    pub valuations: Vec<ConfiguredValuation>,
    #[serde(
        rename = "isGenericEvaluation",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_generic_evaluation: bool,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListResponse {
    pub items: Vec<Evaluation>,
}

// 评价详情（含明细）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationWithDetailsResponse {
    pub evaluation: Evaluation,
    pub details: Vec<EvaluationDetail>,
}
