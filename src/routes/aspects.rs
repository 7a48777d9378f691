use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::aspects::requests::{CreateAspectRequest, UpdateAspectRequest};
use crate::services::CatalogService;
use crate::utils::SafeIDI64;

// 评价维度目录，由管理端维护
static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

pub async fn list_aspects(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_aspects(&req).await
}

pub async fn create_aspect(
    req: HttpRequest,
    body: web::Json<CreateAspectRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.create_aspect(&req, body.into_inner()).await
}

pub async fn get_aspect(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.get_aspect(&req, id.0).await
}

pub async fn update_aspect(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateAspectRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_aspect(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_aspect(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.delete_aspect(&req, id.0).await
}

// 配置路由
pub fn configure_aspect_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/aspects")
            .service(
                web::resource("")
                    .route(web::get().to(list_aspects))
                    .route(web::post().to(create_aspect)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_aspect))
                    .route(web::put().to(update_aspect))
                    .route(web::delete().to(delete_aspect)),
            ),
    );
}
