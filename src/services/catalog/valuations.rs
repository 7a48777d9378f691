use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CatalogService;
use crate::errors::{EvalSystemError, Result};
use crate::models::ApiResponse;
use crate::models::valuations::{
    entities::ValuationScaleEntry,
    requests::{CreateValuationRequest, UpdateValuationRequest},
    responses::ValuationListResponse,
};
use crate::services::error_response;
use crate::storage::Storage;
use crate::utils::validate::{validate_label, validate_weight};

fn not_found(id: i64) -> EvalSystemError {
    EvalSystemError::not_found(format!("Valuation {id} not found"))
}

pub async fn list_valuations(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).list_valuations().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ValuationListResponse { items },
            "Valuation scale retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List valuations", &e)),
    }
}

pub async fn create_valuation(
    service: &CatalogService,
    request: &HttpRequest,
    valuation: CreateValuationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match create_valuation_record(storage.as_ref(), valuation).await {
        Ok(valuation) => {
            info!(
                "Valuation {} ({}, weight {}) created",
                valuation.id, valuation.label, valuation.weight
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                valuation,
                "Valuation created successfully",
            )))
        }
        Err(e) => Ok(error_response("Create valuation", &e)),
    }
}

pub async fn create_valuation_record(
    storage: &dyn Storage,
    mut valuation: CreateValuationRequest,
) -> Result<ValuationScaleEntry> {
    validate_label(&valuation.label).map_err(EvalSystemError::validation)?;
    validate_weight(valuation.weight).map_err(EvalSystemError::validation)?;
    valuation.label = valuation.label.trim().to_string();
    storage.create_valuation(valuation).await
}

pub async fn get_valuation(
    service: &CatalogService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).get_valuation_by_id(id).await {
        Ok(Some(valuation)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            valuation,
            "Valuation retrieved successfully",
        ))),
        Ok(None) => Ok(error_response("Get valuation", &not_found(id))),
        Err(e) => Ok(error_response("Get valuation", &e)),
    }
}

pub async fn update_valuation(
    service: &CatalogService,
    request: &HttpRequest,
    id: i64,
    mut update: UpdateValuationRequest,
) -> ActixResult<HttpResponse> {
    let checked = update
        .label
        .as_deref()
        .map_or(Ok(()), validate_label)
        .and_then(|_| update.weight.map_or(Ok(()), validate_weight));
    if let Err(msg) = checked {
        return Ok(error_response(
            "Update valuation",
            &EvalSystemError::validation(msg),
        ));
    }
    update.label = update.label.map(|label| label.trim().to_string());

    match service.get_storage(request).update_valuation(id, update).await {
        Ok(Some(valuation)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            valuation,
            "Valuation updated successfully",
        ))),
        Ok(None) => Ok(error_response("Update valuation", &not_found(id))),
        Err(e) => Ok(error_response("Update valuation", &e)),
    }
}

pub async fn delete_valuation(
    service: &CatalogService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).delete_valuation(id).await {
        Ok(true) => {
            info!("Valuation {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Valuation deleted successfully")))
        }
        Ok(false) => Ok(error_response("Delete valuation", &not_found(id))),
        Err(e) => Ok(error_response("Delete valuation", &e)),
    }
}
