use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::campaigns::requests::{
    CampaignItemsRequest, CreateCampaignRequest, UpdateCampaignRequest,
};
use crate::services::{CampaignService, ResultService};
use crate::utils::{SafeCampaignIdI64, SafeTeacherId};

// 懒加载的全局服务实例
static CAMPAIGN_SERVICE: Lazy<CampaignService> = Lazy::new(CampaignService::new_lazy);
static RESULT_SERVICE: Lazy<ResultService> = Lazy::new(ResultService::new_lazy);

// HTTP处理程序
pub async fn list_campaigns(req: HttpRequest) -> ActixResult<HttpResponse> {
    CAMPAIGN_SERVICE.list_campaigns(&req).await
}

pub async fn create_campaign(
    req: HttpRequest,
    campaign: web::Json<CreateCampaignRequest>,
) -> ActixResult<HttpResponse> {
    CAMPAIGN_SERVICE
        .create_campaign(&req, campaign.into_inner())
        .await
}

pub async fn get_campaign(
    req: HttpRequest,
    campaign_id: SafeCampaignIdI64,
) -> ActixResult<HttpResponse> {
    CAMPAIGN_SERVICE.get_campaign(&req, campaign_id.0).await
}

pub async fn update_campaign(
    req: HttpRequest,
    campaign_id: SafeCampaignIdI64,
    update: web::Json<UpdateCampaignRequest>,
) -> ActixResult<HttpResponse> {
    CAMPAIGN_SERVICE
        .update_campaign(&req, campaign_id.0, update.into_inner())
        .await
}

pub async fn delete_campaign(
    req: HttpRequest,
    campaign_id: SafeCampaignIdI64,
) -> ActixResult<HttpResponse> {
    CAMPAIGN_SERVICE.delete_campaign(&req, campaign_id.0).await
}

pub async fn get_campaign_items(
    req: HttpRequest,
    campaign_id: SafeCampaignIdI64,
) -> ActixResult<HttpResponse> {
    CAMPAIGN_SERVICE
        .get_campaign_items(&req, campaign_id.0)
        .await
}

pub async fn set_campaign_items(
    req: HttpRequest,
    campaign_id: SafeCampaignIdI64,
    items: web::Json<CampaignItemsRequest>,
) -> ActixResult<HttpResponse> {
    CAMPAIGN_SERVICE
        .set_campaign_items(&req, campaign_id.0, items.into_inner())
        .await
}

pub async fn get_evaluation_form(
    req: HttpRequest,
    campaign_id: SafeCampaignIdI64,
) -> ActixResult<HttpResponse> {
    CAMPAIGN_SERVICE
        .get_evaluation_form(&req, campaign_id.0)
        .await
}

pub async fn get_dashboard(
    req: HttpRequest,
    campaign_id: SafeCampaignIdI64,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE.get_dashboard(&req, campaign_id.0).await
}

pub async fn get_teacher_results(
    req: HttpRequest,
    campaign_id: SafeCampaignIdI64,
    teacher_id: SafeTeacherId,
) -> ActixResult<HttpResponse> {
    RESULT_SERVICE
        .get_teacher_results(&req, campaign_id.0, teacher_id.0)
        .await
}

// 配置路由
pub fn configure_campaign_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/campaigns")
            .service(
                web::resource("")
                    .route(web::get().to(list_campaigns))
                    .route(web::post().to(create_campaign)),
            )
            .service(
                web::resource("/{campaign_id}")
                    .route(web::get().to(get_campaign))
                    .route(web::put().to(update_campaign))
                    .route(web::delete().to(delete_campaign)),
            )
            .service(
                // 管理端配置：包含未启用条目
                web::resource("/{campaign_id}/items")
                    .route(web::get().to(get_campaign_items))
                    .route(web::put().to(set_campaign_items)),
            )
            // 学生端表单：只包含启用条目
            .route("/{campaign_id}/form", web::get().to(get_evaluation_form))
            .route("/{campaign_id}/dashboard", web::get().to(get_dashboard))
            .route(
                "/{campaign_id}/teachers/{teacher_id}/results",
                web::get().to(get_teacher_results),
            ),
    );
}
