use crate::models::evaluations::requests::AspectAnswerInput;
use serde::Deserialize;
use ts_rs::TS;

// 开放问题的回答
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/generic_evaluation.ts")]
pub struct QuestionAnswerInput {
    #[serde(rename = "preguntaId")]
    pub question_id: i64,
    #[serde(rename = "respuesta")]
    pub answer: String,
}

// 提交通用问卷
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/generic_evaluation.ts")]
pub struct SubmitGenericEvaluationRequest {
    #[serde(rename = "configuracionId")]
    pub campaign_id: i64,
    #[serde(rename = "estudianteId")]
    pub student_id: String,
    #[serde(rename = "comentarioGeneral")]
    pub general_comment: Option<String>,
    #[serde(rename = "aspectos", default)]
    pub aspects: Vec<AspectAnswerInput>,
    #[serde(rename = "respuestas", default)]
    pub answers: Vec<QuestionAnswerInput>,
}
