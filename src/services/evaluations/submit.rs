use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationService;
use crate::errors::{EvalSystemError, Result};
use crate::models::ApiResponse;
use crate::models::evaluations::{
    entities::Evaluation,
    requests::{AspectAnswerInput, SubmitEvaluationRequest},
};
use crate::services::error_response;
use crate::storage::Storage;

pub async fn submit(
    service: &EvaluationService,
    request: &HttpRequest,
    req: SubmitEvaluationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match submit_teacher_evaluation(storage.as_ref(), req).await {
        Ok(evaluation) => {
            info!(
                "Evaluation {} submitted by student {}",
                evaluation.id, evaluation.student_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                evaluation,
                "Evaluation submitted successfully",
            )))
        }
        Err(e) => Ok(error_response("Submit evaluation", &e)),
    }
}

/// 提交教师评价
///
/// 评价不存在返回 NotFound，明细为空返回 Validation，已提交返回 AlreadySubmitted。
/// 明细中的维度和评分等级必须属于该活动的启用配置。
pub async fn submit_teacher_evaluation(
    storage: &dyn Storage,
    req: SubmitEvaluationRequest,
) -> Result<Evaluation> {
    let evaluation = storage
        .get_evaluation_by_id(req.evaluation_id)
        .await?
        .ok_or_else(|| {
            EvalSystemError::not_found(format!("Evaluation {} not found", req.evaluation_id))
        })?;

    if req.details.is_empty() {
        return Err(EvalSystemError::validation(
            "At least one aspect rating is required",
        ));
    }
    if evaluation.submitted {
        return Err(EvalSystemError::already_submitted(format!(
            "Evaluation {} has already been submitted",
            evaluation.id
        )));
    }

    check_aspect_answers(storage, evaluation.campaign_id, &req.details).await?;

    storage.submit_evaluation(req).await
}

/// 校验维度评分：维度不可重复，维度与评分等级都必须在活动中启用
pub(crate) async fn check_aspect_answers(
    storage: &dyn Storage,
    campaign_id: i64,
    answers: &[AspectAnswerInput],
) -> Result<()> {
    let aspects: HashSet<i64> = storage
        .list_campaign_aspects(campaign_id, true)
        .await?
        .into_iter()
        .map(|a| a.aspect_id)
        .collect();
    let valuations: HashSet<i64> = storage
        .list_campaign_valuations(campaign_id, true)
        .await?
        .into_iter()
        .map(|v| v.valuation_id)
        .collect();

    let mut seen = HashSet::new();
    for answer in answers {
        if !seen.insert(answer.aspect_id) {
            return Err(EvalSystemError::validation(format!(
                "Aspect {} is rated more than once",
                answer.aspect_id
            )));
        }
        if !aspects.contains(&answer.aspect_id) {
            return Err(EvalSystemError::validation(format!(
                "Aspect {} is not part of campaign {}",
                answer.aspect_id, campaign_id
            )));
        }
        if !valuations.contains(&answer.valuation_id) {
            return Err(EvalSystemError::validation(format!(
                "Valuation {} is not part of campaign {}",
                answer.valuation_id, campaign_id
            )));
        }
    }
    Ok(())
}
