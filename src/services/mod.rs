pub mod campaigns;
pub mod catalog;
pub mod evaluations;
pub mod results;

pub use campaigns::CampaignService;
pub use catalog::CatalogService;
pub use evaluations::EvaluationService;
pub use results::ResultService;

use actix_web::{HttpRequest, HttpResponse, ResponseError, web};
use std::sync::Arc;
use tracing::{error, warn};

use crate::errors::EvalSystemError;
use crate::storage::{RosterSource, Storage};

/// 从 app_data 中取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

pub(crate) fn roster_from_request(request: &HttpRequest) -> Arc<dyn RosterSource> {
    request
        .app_data::<web::Data<Arc<dyn RosterSource>>>()
        .expect("Roster source not found in app data")
        .get_ref()
        .clone()
}

/// 将业务错误转换为响应，服务端错误记 error，其余记 warn
pub(crate) fn error_response(action: &str, err: &EvalSystemError) -> HttpResponse {
    if err.is_internal() {
        error!("{} failed: {}", action, err);
    } else {
        warn!("{} rejected: {}", action, err);
    }
    err.error_response()
}
