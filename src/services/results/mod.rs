//! 活动统计

pub mod dashboard;
pub mod teacher;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ResultService {
    storage: Option<Arc<dyn Storage>>,
}

impl ResultService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub async fn get_dashboard(
        &self,
        request: &HttpRequest,
        campaign_id: i64,
    ) -> ActixResult<HttpResponse> {
        dashboard::get_dashboard(self, request, campaign_id).await
    }

    pub async fn get_teacher_results(
        &self,
        request: &HttpRequest,
        campaign_id: i64,
        teacher_id: String,
    ) -> ActixResult<HttpResponse> {
        teacher::get_teacher_results(self, request, campaign_id, teacher_id).await
    }
}

// 保留两位小数
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
