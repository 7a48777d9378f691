use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::EvaluationService;
use crate::config::AppConfig;
use crate::errors::{EvalSystemError, Result};
use crate::models::ApiResponse;
use crate::models::evaluations::{
    entities::NewEvaluation, requests::BootstrapEvaluationsRequest,
    responses::BootstrapEvaluationsResponse,
};
use crate::services::campaigns::get::load_campaign;
use crate::services::error_response;
use crate::storage::{RosterSource, Storage};
use crate::utils::{local_today, validate};

pub async fn bootstrap(
    service: &EvaluationService,
    request: &HttpRequest,
    req: BootstrapEvaluationsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let roster = service.get_roster(request);
    let skip_window_check = AppConfig::get().evaluation.skip_window_check;

    match bootstrap_evaluations(
        storage.as_ref(),
        roster.as_ref(),
        &req,
        local_today(),
        skip_window_check,
    )
    .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Evaluations initialized successfully",
        ))),
        Err(e) => Ok(error_response("Bootstrap evaluations", &e)),
    }
}

/// 初始化学生在活动中的评价
///
/// 依次检查角色、活动存在、启用状态与时间窗口。通用问卷活动直接返回，
/// 不访问花名册；教师评价活动按花名册补齐缺失的 (活动, 学生, 课程) 评价，
/// 只返回本次新建的记录，重复调用不会产生重复行。
pub async fn bootstrap_evaluations(
    storage: &dyn Storage,
    roster: &dyn RosterSource,
    req: &BootstrapEvaluationsRequest,
    today: NaiveDate,
    skip_window_check: bool,
) -> Result<BootstrapEvaluationsResponse> {
    if !validate::has_evaluation_role(&req.roles) {
        return Err(EvalSystemError::authorization(
            "A student or admin role is required to open an evaluation campaign",
        ));
    }
    validate::validate_person_id(&req.student_id).map_err(EvalSystemError::validation)?;

    let campaign = load_campaign(storage, req.campaign_id).await?;
    campaign.ensure_open(today, skip_window_check)?;
    if skip_window_check && !campaign.is_within_window(today) {
        warn!(
            "Window check bypassed for campaign {} ({} to {}), today is {}",
            campaign.id, campaign.start_date, campaign.end_date, today
        );
    }

    let aspects = storage.list_campaign_aspects(campaign.id, true).await?;
    let valuations = storage.list_campaign_valuations(campaign.id, true).await?;

    if !campaign.teacher_evaluation {
        debug!(
            "Campaign {} is a generic questionnaire, roster not consulted",
            campaign.id
        );
        return Ok(BootstrapEvaluationsResponse {
            created: Vec::new(),
            aspects,
            valuations,
            is_generic_evaluation: true,
        });
    }

    let entries = roster.list_student_roster(&req.student_id).await?;
    if entries.is_empty() {
        return Err(EvalSystemError::profile_not_found(format!(
            "No academic records found for student {}",
            req.student_id
        )));
    }

    let total = entries.len();
    let pending: Vec<NewEvaluation> = entries
        .iter()
        .filter_map(|entry| entry.to_new_evaluation())
        .collect();
    if pending.len() < total {
        debug!(
            "Skipped {} roster rows without course code for student {}",
            total - pending.len(),
            req.student_id
        );
    }

    let created = storage
        .create_missing_evaluations(campaign.id, &req.student_id, pending)
        .await?;

    info!(
        "Bootstrap for student {} in campaign {}: {} evaluations created",
        req.student_id,
        campaign.id,
        created.len()
    );

    Ok(BootstrapEvaluationsResponse {
        created,
        aspects,
        valuations,
        is_generic_evaluation: false,
    })
}
