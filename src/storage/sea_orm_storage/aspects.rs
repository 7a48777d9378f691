//! 评价维度存储操作

use super::{SeaOrmStorage, is_foreign_key_violation};
use crate::entity::aspects::{ActiveModel, Column, Entity as Aspects};
use crate::errors::{EvalSystemError, Result};
use crate::models::aspects::{
    entities::Aspect,
    requests::{CreateAspectRequest, UpdateAspectRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_aspect_impl(&self, req: CreateAspectRequest) -> Result<Aspect> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            label: Set(req.label),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建评价维度失败: {e}")))?;

        Ok(result.into_aspect())
    }

    pub async fn get_aspect_by_id_impl(&self, aspect_id: i64) -> Result<Option<Aspect>> {
        let result = Aspects::find_by_id(aspect_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价维度失败: {e}")))?;

        Ok(result.map(|m| m.into_aspect()))
    }

    pub async fn list_aspects_impl(&self) -> Result<Vec<Aspect>> {
        let aspects = Aspects::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                EvalSystemError::database_operation(format!("查询评价维度列表失败: {e}"))
            })?;

        Ok(aspects.into_iter().map(|m| m.into_aspect()).collect())
    }

    pub async fn update_aspect_impl(
        &self,
        aspect_id: i64,
        update: UpdateAspectRequest,
    ) -> Result<Option<Aspect>> {
        if self.get_aspect_by_id_impl(aspect_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(aspect_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(label) = update.label {
            model.label = Set(label);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新评价维度失败: {e}")))?;

        self.get_aspect_by_id_impl(aspect_id).await
    }

    pub async fn delete_aspect_impl(&self, aspect_id: i64) -> Result<bool> {
        let result = Aspects::delete_by_id(aspect_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    EvalSystemError::in_use(format!(
                        "Aspect {aspect_id} is referenced by submitted answers"
                    ))
                } else {
                    EvalSystemError::database_operation(format!("删除评价维度失败: {e}"))
                }
            })?;

        Ok(result.rows_affected > 0)
    }
}
