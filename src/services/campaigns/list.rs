use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CampaignService;
use crate::models::ApiResponse;
use crate::models::campaigns::responses::CampaignListResponse;
use crate::services::error_response;

pub async fn list_campaigns(
    service: &CampaignService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_campaigns().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CampaignListResponse { items },
            "Campaigns retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List campaigns", &e)),
    }
}
