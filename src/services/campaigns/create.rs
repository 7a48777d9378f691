use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;
use tracing::info;

use super::CampaignService;
use crate::errors::{EvalSystemError, Result};
use crate::models::ApiResponse;
use crate::models::campaigns::{entities::Campaign, requests::CreateCampaignRequest};
use crate::storage::Storage;
use crate::utils::{local_today, validate};
use crate::services::error_response;

pub async fn create_campaign(
    service: &CampaignService,
    request: &HttpRequest,
    campaign: CreateCampaignRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match create_campaign_record(storage.as_ref(), campaign, local_today()).await {
        Ok(campaign) => {
            info!(
                "Campaign {} ({}) created, active: {}",
                campaign.id, campaign.name, campaign.active
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(campaign, "Campaign created successfully")))
        }
        Err(e) => Ok(error_response("Create campaign", &e)),
    }
}

/// 校验并创建活动
///
/// 未显式指定 active 时，开始日期等于 `today` 才视为启用。
pub async fn create_campaign_record(
    storage: &dyn Storage,
    mut campaign: CreateCampaignRequest,
    today: NaiveDate,
) -> Result<Campaign> {
    validate::validate_label(&campaign.name).map_err(EvalSystemError::validation)?;
    validate::validate_date_range(campaign.start_date, campaign.end_date)
        .map_err(EvalSystemError::validation)?;
    if let Some(url) = &campaign.form_url {
        validate::validate_form_url(url).map_err(EvalSystemError::validation)?;
    }

    campaign.name = campaign.name.trim().to_string();
    let active = campaign
        .active
        .unwrap_or_else(|| Campaign::derive_active(campaign.start_date, today));

    storage.create_campaign(campaign, active).await
}
