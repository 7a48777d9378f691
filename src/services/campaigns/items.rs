use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CampaignService;
use super::get::load_campaign;
use crate::errors::{EvalSystemError, Result};
use crate::models::ApiResponse;
use crate::models::campaigns::{
    requests::{CampaignItem, CampaignItemsRequest},
    responses::CampaignItemsResponse,
};
use crate::storage::Storage;
use crate::services::error_response;

pub async fn get_campaign_items(
    service: &CampaignService,
    request: &HttpRequest,
    campaign_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result = async {
        load_campaign(storage.as_ref(), campaign_id).await?;
        load_campaign_items(storage.as_ref(), campaign_id).await
    }
    .await;

    match result {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            items,
            "Campaign items retrieved successfully",
        ))),
        Err(e) => Ok(error_response("Get campaign items", &e)),
    }
}

pub async fn set_campaign_items(
    service: &CampaignService,
    request: &HttpRequest,
    campaign_id: i64,
    items: CampaignItemsRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match configure_campaign_items(storage.as_ref(), campaign_id, items).await {
        Ok(items) => {
            info!(
                "Campaign {} configured: {} aspects, {} valuations, {} questions",
                campaign_id,
                items.aspects.len(),
                items.valuations.len(),
                items.questions.len()
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                items,
                "Campaign items updated successfully",
            )))
        }
        Err(e) => Ok(error_response("Configure campaign items", &e)),
    }
}

/// 替换活动条目配置
///
/// 每个条目必须引用已存在的目录项，同一列表内不能重复。
pub async fn configure_campaign_items(
    storage: &dyn Storage,
    campaign_id: i64,
    items: CampaignItemsRequest,
) -> Result<CampaignItemsResponse> {
    load_campaign(storage, campaign_id).await?;

    if let Some(aspects) = &items.aspects {
        ensure_unique("aspect", aspects)?;
        for item in aspects {
            if storage.get_aspect_by_id(item.id).await?.is_none() {
                return Err(EvalSystemError::not_found(format!(
                    "Aspect {} not found",
                    item.id
                )));
            }
        }
    }
    if let Some(valuations) = &items.valuations {
        ensure_unique("valuation", valuations)?;
        for item in valuations {
            if storage.get_valuation_by_id(item.id).await?.is_none() {
                return Err(EvalSystemError::not_found(format!(
                    "Valuation {} not found",
                    item.id
                )));
            }
        }
    }
    if let Some(questions) = &items.questions {
        ensure_unique("question", questions)?;
        for item in questions {
            if storage.get_question_by_id(item.id).await?.is_none() {
                return Err(EvalSystemError::not_found(format!(
                    "Question {} not found",
                    item.id
                )));
            }
        }
    }

    storage.set_campaign_items(campaign_id, items).await?;
    load_campaign_items(storage, campaign_id).await
}

/// 读取全部配置（包括未启用条目）
pub async fn load_campaign_items(
    storage: &dyn Storage,
    campaign_id: i64,
) -> Result<CampaignItemsResponse> {
    Ok(CampaignItemsResponse {
        aspects: storage.list_campaign_aspects(campaign_id, false).await?,
        valuations: storage.list_campaign_valuations(campaign_id, false).await?,
        questions: storage.list_campaign_questions(campaign_id, false).await?,
    })
}

fn ensure_unique(kind: &str, items: &[CampaignItem]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item.id) {
            return Err(EvalSystemError::validation(format!(
                "Duplicate {kind} {} in campaign configuration",
                item.id
            )));
        }
    }
    Ok(())
}
