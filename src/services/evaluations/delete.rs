use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::EvaluationService;
use crate::errors::EvalSystemError;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn delete_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_evaluation(evaluation_id).await {
        Ok(true) => {
            info!("Evaluation {} deleted", evaluation_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Evaluation deleted successfully",
            )))
        }
        Ok(false) => Ok(error_response(
            "Delete evaluation",
            &EvalSystemError::not_found(format!("Evaluation {evaluation_id} not found")),
        )),
        Err(e) => Ok(error_response("Delete evaluation", &e)),
    }
}
