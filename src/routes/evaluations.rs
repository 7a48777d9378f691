use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::config::AppConfig;
use crate::middlewares::RateLimit;
use crate::models::evaluations::requests::{
    BootstrapEvaluationsRequest, EvaluationListQuery, SubmitEvaluationRequest,
};
use crate::services::EvaluationService;
use crate::utils::SafeEvaluationIdI64;

static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

pub async fn bootstrap(
    req: HttpRequest,
    body: web::Json<BootstrapEvaluationsRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.bootstrap(&req, body.into_inner()).await
}

pub async fn submit(
    req: HttpRequest,
    body: web::Json<SubmitEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.submit(&req, body.into_inner()).await
}

pub async fn list_evaluations(
    req: HttpRequest,
    query: web::Query<EvaluationListQuery>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .list_evaluations(&req, query.into_inner())
        .await
}

pub async fn get_evaluation(
    req: HttpRequest,
    evaluation_id: SafeEvaluationIdI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .get_evaluation(&req, evaluation_id.0)
        .await
}

pub async fn delete_evaluation(
    req: HttpRequest,
    evaluation_id: SafeEvaluationIdI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .delete_evaluation(&req, evaluation_id.0)
        .await
}

// 配置路由
pub fn configure_evaluation_routes(cfg: &mut web::ServiceConfig) {
    let submission_limit = AppConfig::get().evaluation.submission_rate_limit;

    cfg.service(
        web::scope("/api/v1/evaluations")
            .service(web::resource("").route(web::get().to(list_evaluations)))
            .service(
                web::resource("/bootstrap")
                    .wrap(RateLimit::bootstrap())
                    .route(web::post().to(bootstrap)),
            )
            .service(
                web::resource("/submit")
                    .wrap(RateLimit::submission(submission_limit))
                    .route(web::post().to(submit)),
            )
            .service(
                web::resource("/{evaluation_id}")
                    .route(web::get().to(get_evaluation))
                    // 管理端更正
                    .route(web::delete().to(delete_evaluation)),
            ),
    );
}
