use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::questions::requests::{CreateQuestionRequest, UpdateQuestionRequest};
use crate::services::CatalogService;
use crate::utils::SafeIDI64;

static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

pub async fn list_questions(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_questions(&req).await
}

pub async fn create_question(
    req: HttpRequest,
    body: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.create_question(&req, body.into_inner()).await
}

pub async fn get_question(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.get_question(&req, id.0).await
}

pub async fn update_question(
    req: HttpRequest,
    id: SafeIDI64,
    body: web::Json<UpdateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_question(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_question(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.delete_question(&req, id.0).await
}

// 配置路由
pub fn configure_question_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/questions")
            .service(
                web::resource("")
                    .route(web::get().to(list_questions))
                    .route(web::post().to(create_question)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_question))
                    .route(web::put().to(update_question))
                    .route(web::delete().to(delete_question)),
            ),
    );
}
