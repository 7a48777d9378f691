//! 评分等级存储操作

use super::{SeaOrmStorage, is_foreign_key_violation};
use crate::entity::valuation_scales::{ActiveModel, Column, Entity as ValuationScales};
use crate::errors::{EvalSystemError, Result};
use crate::models::valuations::{
    entities::ValuationScaleEntry,
    requests::{CreateValuationRequest, UpdateValuationRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_valuation_impl(
        &self,
        req: CreateValuationRequest,
    ) -> Result<ValuationScaleEntry> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            label: Set(req.label),
            weight: Set(req.weight),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建评分等级失败: {e}")))?;

        Ok(result.into_valuation())
    }

    pub async fn get_valuation_by_id_impl(
        &self,
        valuation_id: i64,
    ) -> Result<Option<ValuationScaleEntry>> {
        let result = ValuationScales::find_by_id(valuation_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评分等级失败: {e}")))?;

        Ok(result.map(|m| m.into_valuation()))
    }

    /// 列出评分等级，权重从高到低
    pub async fn list_valuations_impl(&self) -> Result<Vec<ValuationScaleEntry>> {
        let valuations = ValuationScales::find()
            .order_by_desc(Column::Weight)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                EvalSystemError::database_operation(format!("查询评分等级列表失败: {e}"))
            })?;

        Ok(valuations.into_iter().map(|m| m.into_valuation()).collect())
    }

    pub async fn update_valuation_impl(
        &self,
        valuation_id: i64,
        update: UpdateValuationRequest,
    ) -> Result<Option<ValuationScaleEntry>> {
        if self.get_valuation_by_id_impl(valuation_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(valuation_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(label) = update.label {
            model.label = Set(label);
        }
        if let Some(weight) = update.weight {
            model.weight = Set(weight);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新评分等级失败: {e}")))?;

        self.get_valuation_by_id_impl(valuation_id).await
    }

    pub async fn delete_valuation_impl(&self, valuation_id: i64) -> Result<bool> {
        let result = ValuationScales::delete_by_id(valuation_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    EvalSystemError::in_use(format!(
                        "Valuation {valuation_id} is referenced by submitted answers"
                    ))
                } else {
                    EvalSystemError::database_operation(format!("删除评分等级失败: {e}"))
                }
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_valuations_impl(&self) -> Result<u64> {
        ValuationScales::find()
            .count(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("统计评分等级失败: {e}")))
    }
}
