//! 活动条目配置存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{
    Aspects, CampaignAspectActiveModel, CampaignAspects, CampaignQuestionActiveModel,
    CampaignQuestions, CampaignValuationActiveModel, CampaignValuations, Questions,
    ValuationScales,
};
use crate::entity::{campaign_aspects, campaign_questions, campaign_valuations};
use crate::errors::{EvalSystemError, Result};
use crate::models::campaigns::{
    entities::{ConfiguredAspect, ConfiguredQuestion, ConfiguredValuation},
    requests::{CampaignItem, CampaignItemsRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 替换活动配置
    ///
    /// 每个提供的列表先清空再按顺序写入，全部在一个事务内完成。
    pub async fn set_campaign_items_impl(
        &self,
        campaign_id: i64,
        req: CampaignItemsRequest,
    ) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("开启事务失败: {e}")))?;

        if let Some(aspects) = req.aspects {
            replace_aspects(&txn, campaign_id, &aspects).await?;
        }
        if let Some(valuations) = req.valuations {
            replace_valuations(&txn, campaign_id, &valuations).await?;
        }
        if let Some(questions) = req.questions {
            replace_questions(&txn, campaign_id, &questions).await?;
        }

        txn.commit()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("提交事务失败: {e}")))
    }

    pub async fn list_campaign_aspects_impl(
        &self,
        campaign_id: i64,
        active_only: bool,
    ) -> Result<Vec<ConfiguredAspect>> {
        let mut select =
            CampaignAspects::find().filter(campaign_aspects::Column::CampaignId.eq(campaign_id));
        if active_only {
            select = select.filter(campaign_aspects::Column::Active.eq(true));
        }

        let rows = select
            .order_by_asc(campaign_aspects::Column::DisplayOrder)
            .order_by_asc(campaign_aspects::Column::Id)
            .find_also_related(Aspects)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询活动维度失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, aspect)| aspect.map(|a| link.into_configured(a)))
            .collect())
    }

    pub async fn list_campaign_valuations_impl(
        &self,
        campaign_id: i64,
        active_only: bool,
    ) -> Result<Vec<ConfiguredValuation>> {
        let mut select = CampaignValuations::find()
            .filter(campaign_valuations::Column::CampaignId.eq(campaign_id));
        if active_only {
            select = select.filter(campaign_valuations::Column::Active.eq(true));
        }

        let rows = select
            .order_by_asc(campaign_valuations::Column::DisplayOrder)
            .order_by_asc(campaign_valuations::Column::Id)
            .find_also_related(ValuationScales)
            .all(&self.db)
            .await
            .map_err(|e| {
                EvalSystemError::database_operation(format!("查询活动评分等级失败: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, valuation)| valuation.map(|v| link.into_configured(v)))
            .collect())
    }

    pub async fn list_campaign_questions_impl(
        &self,
        campaign_id: i64,
        active_only: bool,
    ) -> Result<Vec<ConfiguredQuestion>> {
        let mut select = CampaignQuestions::find()
            .filter(campaign_questions::Column::CampaignId.eq(campaign_id));
        if active_only {
            select = select.filter(campaign_questions::Column::Active.eq(true));
        }

        let rows = select
            .order_by_asc(campaign_questions::Column::DisplayOrder)
            .order_by_asc(campaign_questions::Column::Id)
            .find_also_related(Questions)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询活动问题失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, question)| question.map(|q| link.into_configured(q)))
            .collect())
    }
}

async fn replace_aspects(
    txn: &DatabaseTransaction,
    campaign_id: i64,
    items: &[CampaignItem],
) -> Result<()> {
    CampaignAspects::delete_many()
        .filter(campaign_aspects::Column::CampaignId.eq(campaign_id))
        .exec(txn)
        .await
        .map_err(|e| EvalSystemError::database_operation(format!("清空活动维度失败: {e}")))?;

    for (position, item) in items.iter().enumerate() {
        CampaignAspectActiveModel {
            campaign_id: Set(campaign_id),
            aspect_id: Set(item.id),
            display_order: Set(item.order_or(position)),
            active: Set(item.is_active()),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(|e| EvalSystemError::database_operation(format!("写入活动维度失败: {e}")))?;
    }
    Ok(())
}

async fn replace_valuations(
    txn: &DatabaseTransaction,
    campaign_id: i64,
    items: &[CampaignItem],
) -> Result<()> {
    CampaignValuations::delete_many()
        .filter(campaign_valuations::Column::CampaignId.eq(campaign_id))
        .exec(txn)
        .await
        .map_err(|e| EvalSystemError::database_operation(format!("清空活动评分等级失败: {e}")))?;

    for (position, item) in items.iter().enumerate() {
        CampaignValuationActiveModel {
            campaign_id: Set(campaign_id),
            valuation_id: Set(item.id),
            display_order: Set(item.order_or(position)),
            active: Set(item.is_active()),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(|e| EvalSystemError::database_operation(format!("写入活动评分等级失败: {e}")))?;
    }
    Ok(())
}

async fn replace_questions(
    txn: &DatabaseTransaction,
    campaign_id: i64,
    items: &[CampaignItem],
) -> Result<()> {
    CampaignQuestions::delete_many()
        .filter(campaign_questions::Column::CampaignId.eq(campaign_id))
        .exec(txn)
        .await
        .map_err(|e| EvalSystemError::database_operation(format!("清空活动问题失败: {e}")))?;

    for (position, item) in items.iter().enumerate() {
        CampaignQuestionActiveModel {
            campaign_id: Set(campaign_id),
            question_id: Set(item.id),
            display_order: Set(item.order_or(position)),
            active: Set(item.is_active()),
            ..Default::default()
        }
        .insert(txn)
        .await
        .map_err(|e| EvalSystemError::database_operation(format!("写入活动问题失败: {e}")))?;
    }
    Ok(())
}
