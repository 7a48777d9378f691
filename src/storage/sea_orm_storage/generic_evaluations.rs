//! 通用问卷存储操作

use super::{SeaOrmStorage, is_unique_violation};
use crate::entity::generic_aspect_answers::ActiveModel as AspectAnswerActiveModel;
use crate::entity::generic_evaluations::{ActiveModel, Column, Entity as GenericEvaluations};
use crate::entity::generic_question_answers::ActiveModel as QuestionAnswerActiveModel;
use crate::errors::{EvalSystemError, Result};
use crate::models::generic_evaluations::{
    entities::GenericEvaluation, requests::SubmitGenericEvaluationRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn find_generic_evaluation_impl(
        &self,
        campaign_id: i64,
        student_id: &str,
    ) -> Result<Option<GenericEvaluation>> {
        let result = GenericEvaluations::find()
            .filter(Column::CampaignId.eq(campaign_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询通用问卷失败: {e}")))?;

        Ok(result.map(|m| m.into_generic_evaluation()))
    }

    /// 写入通用问卷答卷
    pub async fn create_generic_evaluation_impl(
        &self,
        req: SubmitGenericEvaluationRequest,
    ) -> Result<GenericEvaluation> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let header = ActiveModel {
            campaign_id: Set(req.campaign_id),
            student_id: Set(req.student_id.clone()),
            general_comment: Set(req.general_comment.clone()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                EvalSystemError::already_submitted(format!(
                    "Student {} has already answered campaign {}",
                    req.student_id, req.campaign_id
                ))
            } else {
                EvalSystemError::database_operation(format!("创建通用问卷失败: {e}"))
            }
        })?;

        for answer in &req.aspects {
            AspectAnswerActiveModel {
                generic_evaluation_id: Set(header.id),
                aspect_id: Set(answer.aspect_id),
                valuation_id: Set(answer.valuation_id),
                comment: Set(answer.comment.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("写入维度评分失败: {e}")))?;
        }

        for answer in &req.answers {
            QuestionAnswerActiveModel {
                generic_evaluation_id: Set(header.id),
                question_id: Set(answer.question_id),
                answer: Set(answer.answer.clone()),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("写入问题回答失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(header.into_generic_evaluation())
    }

    pub async fn count_generic_evaluations_impl(&self, campaign_id: i64) -> Result<i64> {
        let count = GenericEvaluations::find()
            .filter(Column::CampaignId.eq(campaign_id))
            .count(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("统计通用问卷失败: {e}")))?;

        Ok(count as i64)
    }
}
