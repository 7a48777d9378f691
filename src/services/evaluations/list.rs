use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use crate::errors::EvalSystemError;
use crate::models::ApiResponse;
use crate::models::evaluations::{
    requests::EvaluationListQuery, responses::EvaluationListResponse,
};
use crate::services::error_response;
use crate::utils::validate::validate_person_id;

pub async fn list_evaluations(
    service: &EvaluationService,
    request: &HttpRequest,
    query: EvaluationListQuery,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_person_id(&query.student_id) {
        return Ok(error_response(
            "List evaluations",
            &EvalSystemError::validation(msg),
        ));
    }

    let storage = service.get_storage(request);

    match storage
        .list_student_evaluations(&query.student_id, query.campaign_id)
        .await
    {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EvaluationListResponse { items },
            "Evaluations retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List evaluations", &e)),
    }
}
