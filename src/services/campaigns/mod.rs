pub mod create;
pub mod delete;
pub mod form;
pub mod get;
pub mod items;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::campaigns::requests::{
    CampaignItemsRequest, CreateCampaignRequest, UpdateCampaignRequest,
};
use crate::storage::Storage;

pub struct CampaignService {
    storage: Option<Arc<dyn Storage>>,
}

impl CampaignService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    // 获取活动列表
    pub async fn list_campaigns(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_campaigns(self, request).await
    }

    pub async fn create_campaign(
        &self,
        request: &HttpRequest,
        campaign: CreateCampaignRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_campaign(self, request, campaign).await
    }

    pub async fn get_campaign(
        &self,
        request: &HttpRequest,
        campaign_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_campaign(self, request, campaign_id).await
    }

    pub async fn update_campaign(
        &self,
        request: &HttpRequest,
        campaign_id: i64,
        update: UpdateCampaignRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_campaign(self, request, campaign_id, update).await
    }

    pub async fn delete_campaign(
        &self,
        request: &HttpRequest,
        campaign_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_campaign(self, request, campaign_id).await
    }

    // 活动条目配置（管理视图）
    pub async fn get_campaign_items(
        &self,
        request: &HttpRequest,
        campaign_id: i64,
    ) -> ActixResult<HttpResponse> {
        items::get_campaign_items(self, request, campaign_id).await
    }

    pub async fn set_campaign_items(
        &self,
        request: &HttpRequest,
        campaign_id: i64,
        items: CampaignItemsRequest,
    ) -> ActixResult<HttpResponse> {
        items::set_campaign_items(self, request, campaign_id, items).await
    }

    // 学生端评价表单
    pub async fn get_evaluation_form(
        &self,
        request: &HttpRequest,
        campaign_id: i64,
    ) -> ActixResult<HttpResponse> {
        form::get_evaluation_form(self, request, campaign_id).await
    }
}
