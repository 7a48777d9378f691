use std::collections::{HashMap, HashSet};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use tracing::info;

use super::EvaluationService;
use super::submit::check_aspect_answers;
use crate::config::AppConfig;
use crate::errors::{EvalSystemError, Result};
use crate::models::ApiResponse;
use crate::models::generic_evaluations::{
    requests::{QuestionAnswerInput, SubmitGenericEvaluationRequest},
    responses::GenericSubmissionResponse,
};
use crate::models::questions::entities::QuestionType;
use crate::services::campaigns::get::load_campaign;
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::{local_today, validate};

pub async fn submit_generic(
    service: &EvaluationService,
    request: &HttpRequest,
    req: SubmitGenericEvaluationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let skip_window_check = AppConfig::get().evaluation.skip_window_check;

    match submit_generic_evaluation(storage.as_ref(), req, local_today(), skip_window_check).await
    {
        Ok(response) => {
            info!(
                "Generic evaluation {} stored for student {} in campaign {}",
                response.evaluation.id, response.evaluation.student_id, response.evaluation.campaign_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                response,
                "Questionnaire submitted successfully",
            )))
        }
        Err(e) => Ok(error_response("Submit generic evaluation", &e)),
    }
}

/// 提交通用问卷
///
/// 活动必须存在且处于开放状态；每个学生在同一活动中只能提交一次，
/// 维度评分与问题回答不能同时为空。
pub async fn submit_generic_evaluation(
    storage: &dyn Storage,
    req: SubmitGenericEvaluationRequest,
    today: NaiveDate,
    skip_window_check: bool,
) -> Result<GenericSubmissionResponse> {
    validate::validate_person_id(&req.student_id).map_err(EvalSystemError::validation)?;

    let campaign = load_campaign(storage, req.campaign_id).await?;
    campaign.ensure_open(today, skip_window_check)?;
    if campaign.teacher_evaluation {
        return Err(EvalSystemError::validation(format!(
            "Campaign {} collects teacher evaluations, not questionnaires",
            campaign.id
        )));
    }

    if storage
        .find_generic_evaluation(campaign.id, &req.student_id)
        .await?
        .is_some()
    {
        return Err(EvalSystemError::already_submitted(format!(
            "Student {} has already answered campaign {}",
            req.student_id, campaign.id
        )));
    }

    if req.aspects.is_empty() && req.answers.is_empty() {
        return Err(EvalSystemError::validation(
            "At least one aspect rating or question answer is required",
        ));
    }

    check_aspect_answers(storage, campaign.id, &req.aspects).await?;
    check_question_answers(storage, campaign.id, &req.answers).await?;

    let aspect_answers = req.aspects.len();
    let question_answers = req.answers.len();
    let evaluation = storage.create_generic_evaluation(req).await?;

    Ok(GenericSubmissionResponse {
        evaluation,
        aspect_answers,
        question_answers,
    })
}

/// 校验问题回答：问题必须在活动中启用，单选题答案必须是选项之一
async fn check_question_answers(
    storage: &dyn Storage,
    campaign_id: i64,
    answers: &[QuestionAnswerInput],
) -> Result<()> {
    let questions: HashMap<i64, (QuestionType, Vec<String>)> = storage
        .list_campaign_questions(campaign_id, true)
        .await?
        .into_iter()
        .map(|q| (q.question_id, (q.question_type, q.options)))
        .collect();

    let mut seen = HashSet::new();
    for answer in answers {
        if !seen.insert(answer.question_id) {
            return Err(EvalSystemError::validation(format!(
                "Question {} is answered more than once",
                answer.question_id
            )));
        }
        let (question_type, options) = questions.get(&answer.question_id).ok_or_else(|| {
            EvalSystemError::validation(format!(
                "Question {} is not part of campaign {}",
                answer.question_id, campaign_id
            ))
        })?;
        if *question_type == QuestionType::MultipleChoice && !options.contains(&answer.answer) {
            return Err(EvalSystemError::validation(format!(
                "Answer to question {} is not one of its options",
                answer.question_id
            )));
        }
    }
    Ok(())
}
