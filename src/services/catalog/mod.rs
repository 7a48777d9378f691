//! 目录管理：评价维度、评分等级、开放问题

pub mod aspects;
pub mod questions;
pub mod valuations;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    aspects::requests::{CreateAspectRequest, UpdateAspectRequest},
    questions::requests::{CreateQuestionRequest, UpdateQuestionRequest},
    valuations::requests::{CreateValuationRequest, UpdateValuationRequest},
};
use crate::storage::Storage;

pub struct CatalogService {
    storage: Option<Arc<dyn Storage>>,
}

impl CatalogService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 评价维度
    pub async fn list_aspects(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        aspects::list_aspects(self, request).await
    }

    pub async fn create_aspect(
        &self,
        request: &HttpRequest,
        aspect: CreateAspectRequest,
    ) -> ActixResult<HttpResponse> {
        aspects::create_aspect(self, request, aspect).await
    }

    pub async fn get_aspect(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        aspects::get_aspect(self, request, id).await
    }

    pub async fn update_aspect(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateAspectRequest,
    ) -> ActixResult<HttpResponse> {
        aspects::update_aspect(self, request, id, update).await
    }

    pub async fn delete_aspect(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        aspects::delete_aspect(self, request, id).await
    }

    // 评分等级
    pub async fn list_valuations(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        valuations::list_valuations(self, request).await
    }

    pub async fn create_valuation(
        &self,
        request: &HttpRequest,
        valuation: CreateValuationRequest,
    ) -> ActixResult<HttpResponse> {
        valuations::create_valuation(self, request, valuation).await
    }

    pub async fn get_valuation(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        valuations::get_valuation(self, request, id).await
    }

    pub async fn update_valuation(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateValuationRequest,
    ) -> ActixResult<HttpResponse> {
        valuations::update_valuation(self, request, id, update).await
    }

    pub async fn delete_valuation(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        valuations::delete_valuation(self, request, id).await
    }

    // 开放问题
    pub async fn list_questions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        questions::list_questions(self, request).await
    }

    pub async fn create_question(
        &self,
        request: &HttpRequest,
        question: CreateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        questions::create_question(self, request, question).await
    }

    pub async fn get_question(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        questions::get_question(self, request, id).await
    }

    pub async fn update_question(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        questions::update_question(self, request, id, update).await
    }

    pub async fn delete_question(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        questions::delete_question(self, request, id).await
    }
}
