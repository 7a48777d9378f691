use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ResultService, round2};
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::results::responses::CampaignDashboardResponse;
use crate::services::campaigns::get::load_campaign;
use crate::services::error_response;
use crate::storage::Storage;

pub async fn get_dashboard(
    service: &ResultService,
    request: &HttpRequest,
    campaign_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match campaign_dashboard(storage.as_ref(), campaign_id).await {
        Ok(dashboard) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            dashboard,
            "Campaign dashboard retrieved successfully",
        ))),
        Err(e) => Ok(error_response("Campaign dashboard", &e)),
    }
}

/// 活动总览：评价数量、提交率、参与的学生与教师
pub async fn campaign_dashboard(
    storage: &dyn Storage,
    campaign_id: i64,
) -> Result<CampaignDashboardResponse> {
    load_campaign(storage, campaign_id).await?;

    let evaluations = storage.list_campaign_evaluations(campaign_id).await?;
    let generic_submissions = storage.count_generic_evaluations(campaign_id).await?;

    let total = evaluations.len() as i64;
    let submitted = evaluations.iter().filter(|e| e.submitted).count() as i64;
    let submission_rate = if total > 0 {
        round2(submitted as f64 / total as f64 * 100.0)
    } else {
        0.0
    };

    let students: HashSet<&str> = evaluations.iter().map(|e| e.student_id.as_str()).collect();
    let teachers: HashSet<&str> = evaluations.iter().map(|e| e.teacher_id.as_str()).collect();

    Ok(CampaignDashboardResponse {
        campaign_id,
        total_evaluations: total,
        submitted_evaluations: submitted,
        pending_evaluations: total - submitted,
        submission_rate,
        generic_submissions,
        distinct_students: students.len() as i64,
        distinct_teachers: teachers.len() as i64,
    })
}
