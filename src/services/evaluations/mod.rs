//! 评价流程：初始化、提交、查询与管理

pub mod bootstrap;
pub mod delete;
pub mod generic;
pub mod get;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    evaluations::requests::{
        BootstrapEvaluationsRequest, EvaluationListQuery, SubmitEvaluationRequest,
    },
    generic_evaluations::requests::SubmitGenericEvaluationRequest,
};
use crate::storage::{RosterSource, Storage};

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
    roster: Option<Arc<dyn RosterSource>>,
}

impl EvaluationService {
    pub fn new_lazy() -> Self {
        Self {
            storage: None,
            roster: None,
        }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    pub(crate) fn get_roster(&self, request: &HttpRequest) -> Arc<dyn RosterSource> {
        match &self.roster {
            Some(roster) => roster.clone(),
            None => super::roster_from_request(request),
        }
    }

    // 学生进入活动时初始化评价
    pub async fn bootstrap(
        &self,
        request: &HttpRequest,
        req: BootstrapEvaluationsRequest,
    ) -> ActixResult<HttpResponse> {
        bootstrap::bootstrap(self, request, req).await
    }

    // 提交教师评价
    pub async fn submit(
        &self,
        request: &HttpRequest,
        req: SubmitEvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit(self, request, req).await
    }

    // 提交通用问卷
    pub async fn submit_generic(
        &self,
        request: &HttpRequest,
        req: SubmitGenericEvaluationRequest,
    ) -> ActixResult<HttpResponse> {
        generic::submit_generic(self, request, req).await
    }

    pub async fn list_evaluations(
        &self,
        request: &HttpRequest,
        query: EvaluationListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_evaluations(self, request, query).await
    }

    pub async fn get_evaluation(
        &self,
        request: &HttpRequest,
        evaluation_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_evaluation(self, request, evaluation_id).await
    }

    pub async fn delete_evaluation(
        &self,
        request: &HttpRequest,
        evaluation_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_evaluation(self, request, evaluation_id).await
    }
}
