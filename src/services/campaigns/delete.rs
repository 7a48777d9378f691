use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CampaignService;
use crate::errors::EvalSystemError;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn delete_campaign(
    service: &CampaignService,
    request: &HttpRequest,
    campaign_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_campaign(campaign_id).await {
        Ok(true) => {
            info!("Campaign {} deleted", campaign_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Campaign deleted successfully")))
        }
        Ok(false) => Ok(error_response(
            "Delete campaign",
            &EvalSystemError::not_found(format!("Campaign {campaign_id} not found")),
        )),
        Err(e) => Ok(error_response("Delete campaign", &e)),
    }
}
