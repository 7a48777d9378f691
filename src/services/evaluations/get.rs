use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::errors::{EvalSystemError, Result};
use crate::models::ApiResponse;
use crate::models::evaluations::responses::EvaluationWithDetailsResponse;
use crate::services::error_response;
use crate::storage::Storage;

pub async fn get_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    evaluation_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_evaluation_with_details(storage.as_ref(), evaluation_id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Evaluation retrieved successfully",
        ))),
        Err(e) => Ok(error_response("Get evaluation", &e)),
    }
}

pub async fn load_evaluation_with_details(
    storage: &dyn Storage,
    evaluation_id: i64,
) -> Result<EvaluationWithDetailsResponse> {
    let evaluation = storage
        .get_evaluation_by_id(evaluation_id)
        .await?
        .ok_or_else(|| EvalSystemError::not_found(format!("Evaluation {evaluation_id} not found")))?;
    let details = storage.list_evaluation_details(evaluation_id).await?;

    Ok(EvaluationWithDetailsResponse {
        evaluation,
        details,
    })
}
