use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CampaignService;
use crate::errors::{EvalSystemError, Result};
use crate::models::ApiResponse;
use crate::models::campaigns::entities::Campaign;
use crate::storage::Storage;
use crate::services::error_response;

pub async fn get_campaign(
    service: &CampaignService,
    request: &HttpRequest,
    campaign_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_campaign(storage.as_ref(), campaign_id).await {
        Ok(campaign) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            campaign,
            "Campaign retrieved successfully",
        ))),
        Err(e) => Ok(error_response("Get campaign", &e)),
    }
}

/// 读取活动，不存在时返回 NotFound
pub async fn load_campaign(storage: &dyn Storage, campaign_id: i64) -> Result<Campaign> {
    storage
        .get_campaign_by_id(campaign_id)
        .await?
        .ok_or_else(|| EvalSystemError::not_found(format!("Campaign {campaign_id} not found")))
}
