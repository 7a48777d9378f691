use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CatalogService;
use crate::errors::{EvalSystemError, Result};
use crate::models::ApiResponse;
use crate::models::aspects::{
    entities::Aspect,
    requests::{CreateAspectRequest, UpdateAspectRequest},
    responses::AspectListResponse,
};
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::validate::validate_label;

fn not_found(id: i64) -> EvalSystemError {
    EvalSystemError::not_found(format!("Aspect {id} not found"))
}

pub async fn list_aspects(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).list_aspects().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AspectListResponse { items },
            "Aspects retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List aspects", &e)),
    }
}

pub async fn create_aspect(
    service: &CatalogService,
    request: &HttpRequest,
    aspect: CreateAspectRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match create_aspect_record(storage.as_ref(), aspect).await {
        Ok(aspect) => {
            info!("Aspect {} ({}) created", aspect.id, aspect.label);
            Ok(HttpResponse::Created().json(ApiResponse::success(aspect, "Aspect created successfully")))
        }
        Err(e) => Ok(error_response("Create aspect", &e)),
    }
}

pub async fn create_aspect_record(
    storage: &dyn Storage,
    mut aspect: CreateAspectRequest,
) -> Result<Aspect> {
    validate_label(&aspect.label).map_err(EvalSystemError::validation)?;
    aspect.label = aspect.label.trim().to_string();
    storage.create_aspect(aspect).await
}

pub async fn get_aspect(
    service: &CatalogService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).get_aspect_by_id(id).await {
        Ok(Some(aspect)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            aspect,
            "Aspect retrieved successfully",
        ))),
        Ok(None) => Ok(error_response("Get aspect", &not_found(id))),
        Err(e) => Ok(error_response("Get aspect", &e)),
    }
}

pub async fn update_aspect(
    service: &CatalogService,
    request: &HttpRequest,
    id: i64,
    mut update: UpdateAspectRequest,
) -> ActixResult<HttpResponse> {
    if let Some(label) = &update.label {
        if let Err(msg) = validate_label(label) {
            return Ok(error_response(
                "Update aspect",
                &EvalSystemError::validation(msg),
            ));
        }
        update.label = Some(label.trim().to_string());
    }

    match service.get_storage(request).update_aspect(id, update).await {
        Ok(Some(aspect)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            aspect,
            "Aspect updated successfully",
        ))),
        Ok(None) => Ok(error_response("Update aspect", &not_found(id))),
        Err(e) => Ok(error_response("Update aspect", &e)),
    }
}

pub async fn delete_aspect(
    service: &CatalogService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).delete_aspect(id).await {
        Ok(true) => {
            info!("Aspect {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Aspect deleted successfully")))
        }
        Ok(false) => Ok(error_response("Delete aspect", &not_found(id))),
        Err(e) => Ok(error_response("Delete aspect", &e)),
    }
}
