use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::valuations::requests::{CreateValuationRequest, UpdateValuationRequest};
use crate::services::CatalogService;
use crate::utils::SafeIDI64;

// 评分等级目录
static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

pub async fn list_valuations(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_valuations(&req).await
}

pub async fn create_valuation(
    req: HttpRequest,
    body: web::Json<CreateValuationRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.create_valuation(&req, body.into_inner()).await
}

pub async fn get_valuation(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.get_valuation(&req, id.0).await
}

pub async fn update_valuation(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateValuationRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_valuation(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_valuation(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.delete_valuation(&req, id.0).await
}

// 配置路由
pub fn configure_valuation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/valuations")
            .service(
                web::resource("")
                    .route(web::get().to(list_valuations))
                    .route(web::post().to(create_valuation)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_valuation))
                    .route(web::put().to(update_valuation))
                    .route(web::delete().to(delete_valuation)),
            ),
    );
}
