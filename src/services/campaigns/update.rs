use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use tracing::info;

use super::CampaignService;
use super::get::load_campaign;
use crate::errors::{EvalSystemError, Result};
use crate::models::ApiResponse;
use crate::models::campaigns::{entities::Campaign, requests::UpdateCampaignRequest};
use crate::storage::Storage;
use crate::utils::{local_today, validate};
use crate::services::error_response;

pub async fn update_campaign(
    service: &CampaignService,
    request: &HttpRequest,
    campaign_id: i64,
    update: UpdateCampaignRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match update_campaign_record(storage.as_ref(), campaign_id, update, local_today()).await {
        Ok(campaign) => {
            info!("Campaign {} updated, active: {}", campaign.id, campaign.active);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                campaign,
                "Campaign updated successfully",
            )))
        }
        Err(e) => Ok(error_response("Update campaign", &e)),
    }
}

/// 部分更新活动
///
/// 开始日期变化且未显式指定 active 时，按新的开始日期重新推导。
pub async fn update_campaign_record(
    storage: &dyn Storage,
    campaign_id: i64,
    mut update: UpdateCampaignRequest,
    today: NaiveDate,
) -> Result<Campaign> {
    let existing = load_campaign(storage, campaign_id).await?;

    if let Some(name) = &update.name {
        validate::validate_label(name).map_err(EvalSystemError::validation)?;
        update.name = Some(name.trim().to_string());
    }
    if let Some(url) = &update.form_url {
        validate::validate_form_url(url).map_err(EvalSystemError::validation)?;
    }

    let start_date = update.start_date.unwrap_or(existing.start_date);
    let end_date = update.end_date.unwrap_or(existing.end_date);
    validate::validate_date_range(start_date, end_date).map_err(EvalSystemError::validation)?;

    if update.active.is_none() && start_date != existing.start_date {
        update.active = Some(Campaign::derive_active(start_date, today));
    }

    storage
        .update_campaign(campaign_id, update)
        .await?
        .ok_or_else(|| EvalSystemError::not_found(format!("Campaign {campaign_id} not found")))
}
