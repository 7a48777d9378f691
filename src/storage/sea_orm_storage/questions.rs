//! 开放问题存储操作

use super::{SeaOrmStorage, is_foreign_key_violation};
use crate::entity::questions::{ActiveModel, Column, Entity as Questions, encode_options};
use crate::errors::{EvalSystemError, Result};
use crate::models::questions::{
    entities::Question,
    requests::{CreateQuestionRequest, UpdateQuestionRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_question_impl(&self, req: CreateQuestionRequest) -> Result<Question> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            text: Set(req.text),
            question_type: Set(req.question_type.to_string()),
            options: Set(encode_options(&req.options)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("创建问题失败: {e}")))?;

        Ok(result.into_question())
    }

    pub async fn get_question_by_id_impl(&self, question_id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(question_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询问题失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    pub async fn list_questions_impl(&self) -> Result<Vec<Question>> {
        let questions = Questions::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询问题列表失败: {e}")))?;

        Ok(questions.into_iter().map(|m| m.into_question()).collect())
    }

    pub async fn update_question_impl(
        &self,
        question_id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        if self.get_question_by_id_impl(question_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(question_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(text) = update.text {
            model.text = Set(text);
        }
        if let Some(question_type) = update.question_type {
            model.question_type = Set(question_type.to_string());
        }
        if let Some(options) = update.options {
            model.options = Set(encode_options(&options)?);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("更新问题失败: {e}")))?;

        self.get_question_by_id_impl(question_id).await
    }

    pub async fn delete_question_impl(&self, question_id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(question_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    EvalSystemError::in_use(format!(
                        "Question {question_id} is referenced by submitted answers"
                    ))
                } else {
                    EvalSystemError::database_operation(format!("删除问题失败: {e}"))
                }
            })?;

        Ok(result.rows_affected > 0)
    }
}
