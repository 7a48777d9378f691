use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::config::AppConfig;
use crate::middlewares::RateLimit;
use crate::models::generic_evaluations::requests::SubmitGenericEvaluationRequest;
use crate::services::EvaluationService;

static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

pub async fn submit_generic(
    req: HttpRequest,
    body: web::Json<SubmitGenericEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .submit_generic(&req, body.into_inner())
        .await
}

// 配置路由
pub fn configure_generic_evaluation_routes(cfg: &mut web::ServiceConfig) {
    let submission_limit = AppConfig::get().evaluation.submission_rate_limit;

    cfg.service(
        web::resource("/api/v1/generic-evaluations")
            .wrap(RateLimit::generic_submission(submission_limit))
            .route(web::post().to(submit_generic)),
    );
}
