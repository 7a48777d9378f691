//! 评价活动存储操作

use super::SeaOrmStorage;
use crate::entity::campaigns::{ActiveModel, Column, Entity as Campaigns};
use crate::errors::{EvalSystemError, Result};
use crate::models::campaigns::{
    entities::Campaign,
    requests::{CreateCampaignRequest, UpdateCampaignRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建活动
    pub async fn create_campaign_impl(
        &self,
        req: CreateCampaignRequest,
        active: bool,
    ) -> Result<Campaign> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            active: Set(active),
            teacher_evaluation: Set(req.teacher_evaluation),
            form_url: Set(req.form_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建活动失败: {e}")))?;

        Ok(result.into_campaign())
    }

    /// 通过 ID 获取活动
    pub async fn get_campaign_by_id_impl(&self, campaign_id: i64) -> Result<Option<Campaign>> {
        let result = Campaigns::find_by_id(campaign_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询活动失败: {e}")))?;

        Ok(result.map(|m| m.into_campaign()))
    }

    /// 列出全部活动
    pub async fn list_campaigns_impl(&self) -> Result<Vec<Campaign>> {
        let campaigns = Campaigns::find()
            .order_by_desc(Column::StartDate)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询活动列表失败: {e}")))?;

        Ok(campaigns.into_iter().map(|m| m.into_campaign()).collect())
    }

    /// 更新活动
    pub async fn update_campaign_impl(
        &self,
        campaign_id: i64,
        update: UpdateCampaignRequest,
    ) -> Result<Option<Campaign>> {
        let existing = self.get_campaign_by_id_impl(campaign_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(campaign_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date);
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date);
        }
        if let Some(teacher_evaluation) = update.teacher_evaluation {
            model.teacher_evaluation = Set(teacher_evaluation);
        }
        if let Some(form_url) = update.form_url {
            model.form_url = Set(Some(form_url));
        }
        if let Some(active) = update.active {
            model.active = Set(active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新活动失败: {e}")))?;

        self.get_campaign_by_id_impl(campaign_id).await
    }

    /// 删除活动
    pub async fn delete_campaign_impl(&self, campaign_id: i64) -> Result<bool> {
        let result = Campaigns::delete_by_id(campaign_id)
            .exec(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除活动失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
