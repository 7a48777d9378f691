use super::entities::GenericEvaluation;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/generic_evaluation.ts")]
pub struct GenericSubmissionResponse {
    pub evaluation: GenericEvaluation,
    pub aspect_answers: usize,
    pub question_answers: usize,
}
