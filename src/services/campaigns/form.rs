use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CampaignService;
use super::get::load_campaign;
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::campaigns::responses::EvaluationFormResponse;
use crate::storage::Storage;
use crate::services::error_response;

pub async fn get_evaluation_form(
    service: &CampaignService,
    request: &HttpRequest,
    campaign_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match assemble_form(storage.as_ref(), campaign_id).await {
        Ok(form) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            form,
            "Evaluation form retrieved successfully",
        ))),
        Err(e) => Ok(error_response("Assemble evaluation form", &e)),
    }
}

/// 组装评价表单
///
/// 只包含启用的配置，按 display_order 排序；每次都直接读库。
pub async fn assemble_form(
    storage: &dyn Storage,
    campaign_id: i64,
) -> Result<EvaluationFormResponse> {
    let campaign = load_campaign(storage, campaign_id).await?;

    Ok(EvaluationFormResponse {
        campaign,
        aspects: storage.list_campaign_aspects(campaign_id, true).await?,
        valuations: storage.list_campaign_valuations(campaign_id, true).await?,
        questions: storage.list_campaign_questions(campaign_id, true).await?,
    })
}
