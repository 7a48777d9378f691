//! 教师评价存储操作

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::evaluation_details::{
    ActiveModel as DetailActiveModel, Column as DetailColumn, Entity as EvaluationDetails,
};
use crate::entity::evaluations::{ActiveModel, Column, Entity as Evaluations};
use crate::errors::{EvalSystemError, Result};
use crate::models::evaluations::{
    entities::{Evaluation, EvaluationDetail, NewEvaluation},
    requests::SubmitEvaluationRequest,
};
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 补齐学生在活动中缺失的评价
    ///
    /// 已存在的 (活动, 学生, 课程) 会被跳过；并发请求由唯一索引兜底，
    /// 冲突行静默忽略，不计入返回结果。
    pub async fn create_missing_evaluations_impl(
        &self,
        campaign_id: i64,
        student_id: &str,
        pending: Vec<NewEvaluation>,
    ) -> Result<Vec<Evaluation>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let existing: HashSet<String> = Evaluations::find()
            .filter(Column::CampaignId.eq(campaign_id))
            .filter(Column::StudentId.eq(student_id))
            .all(&txn)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询已有评价失败: {e}")))?
            .into_iter()
            .map(|m| m.course_code)
            .collect();

        let now = chrono::Utc::now().timestamp();
        let mut created_codes: Vec<String> = Vec::new();

        for new in pending {
            if existing.contains(&new.course_code) || created_codes.contains(&new.course_code) {
                continue;
            }

            let model = ActiveModel {
                campaign_id: Set(campaign_id),
                student_id: Set(student_id.to_string()),
                teacher_id: Set(new.teacher_id),
                teacher_name: Set(new.teacher_name),
                course_code: Set(new.course_code.clone()),
                course_name: Set(new.course_name),
                general_comment: Set(None),
                submitted_at: Set(None),
                created_at: Set(now),
                ..Default::default()
            };

            let inserted = Evaluations::insert(model)
                .on_conflict(
                    OnConflict::columns([Column::CampaignId, Column::StudentId, Column::CourseCode])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(&txn)
                .await
                .map_err(|e| EvalSystemError::database_operation(format!("创建评价失败: {e}")))?;

            if inserted > 0 {
                created_codes.push(new.course_code);
            }
        }

        let created = if created_codes.is_empty() {
            Vec::new()
        } else {
            Evaluations::find()
                .filter(Column::CampaignId.eq(campaign_id))
                .filter(Column::StudentId.eq(student_id))
                .filter(Column::CourseCode.is_in(created_codes))
                .order_by_asc(Column::Id)
                .all(&txn)
                .await
                .map_err(|e| {
                    EvalSystemError::database_operation(format!("查询新建评价失败: {e}"))
                })?
        };

        txn.commit()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(created.into_iter().map(|m| m.into_evaluation()).collect())
    }

    pub async fn get_evaluation_by_id_impl(&self, evaluation_id: i64) -> Result<Option<Evaluation>> {
        let result = Evaluations::find_by_id(evaluation_id)
            .one(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价失败: {e}")))?;

        Ok(result.map(|m| m.into_evaluation()))
    }

    pub async fn list_student_evaluations_impl(
        &self,
        student_id: &str,
        campaign_id: Option<i64>,
    ) -> Result<Vec<Evaluation>> {
        let mut select = Evaluations::find().filter(Column::StudentId.eq(student_id));
        if let Some(campaign_id) = campaign_id {
            select = select.filter(Column::CampaignId.eq(campaign_id));
        }

        let evaluations = select
            .order_by_desc(Column::CampaignId)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询学生评价失败: {e}")))?;

        Ok(evaluations.into_iter().map(|m| m.into_evaluation()).collect())
    }

    pub async fn list_campaign_evaluations_impl(&self, campaign_id: i64) -> Result<Vec<Evaluation>> {
        let evaluations = Evaluations::find()
            .filter(Column::CampaignId.eq(campaign_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询活动评价失败: {e}")))?;

        Ok(evaluations.into_iter().map(|m| m.into_evaluation()).collect())
    }

    pub async fn list_evaluation_details_impl(
        &self,
        evaluation_id: i64,
    ) -> Result<Vec<EvaluationDetail>> {
        let details = EvaluationDetails::find()
            .filter(DetailColumn::EvaluationId.eq(evaluation_id))
            .order_by_asc(DetailColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价明细失败: {e}")))?;

        Ok(details.into_iter().map(|m| m.into_detail()).collect())
    }

    /// 提交评价
    ///
    /// 标记提交与写入明细在同一事务内；更新条件带 submitted_at IS NULL，
    /// 并发的第二次提交影响行数为 0，返回 AlreadySubmitted。
    pub async fn submit_evaluation_impl(&self, req: SubmitEvaluationRequest) -> Result<Evaluation> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Evaluations::find_by_id(req.evaluation_id)
            .one(&txn)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价失败: {e}")))?
            .ok_or_else(|| {
                EvalSystemError::not_found(format!("Evaluation {} not found", req.evaluation_id))
            })?;

        let already_submitted = || {
            EvalSystemError::already_submitted(format!(
                "Evaluation {} has already been submitted",
                req.evaluation_id
            ))
        };

        if existing.submitted_at.is_some() {
            return Err(already_submitted());
        }

        let now = chrono::Utc::now().timestamp();

        let updated = Evaluations::update_many()
            .col_expr(Column::SubmittedAt, Expr::value(now))
            .col_expr(
                Column::GeneralComment,
                Expr::value(req.general_comment.clone()),
            )
            .filter(Column::Id.eq(req.evaluation_id))
            .filter(Column::SubmittedAt.is_null())
            .exec(&txn)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("提交评价失败: {e}")))?;

        if updated.rows_affected == 0 {
            return Err(already_submitted());
        }

        for detail in &req.details {
            DetailActiveModel {
                evaluation_id: Set(req.evaluation_id),
                aspect_id: Set(detail.aspect_id),
                valuation_id: Set(detail.valuation_id),
                comment: Set(detail.comment.clone()),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("写入评价明细失败: {e}")))?;
        }

        let submitted = Evaluations::find_by_id(req.evaluation_id)
            .one(&txn)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价失败: {e}")))?
            .ok_or_else(|| {
                EvalSystemError::not_found(format!("Evaluation {} not found", req.evaluation_id))
            })?;

        txn.commit()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(submitted.into_evaluation())
    }

    /// 删除评价及其明细
    pub async fn delete_evaluation_impl(&self, evaluation_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("开启事务失败: {e}")))?;

        EvaluationDetails::delete_many()
            .filter(DetailColumn::EvaluationId.eq(evaluation_id))
            .exec(&txn)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除评价明细失败: {e}")))?;

        let result = Evaluations::delete_by_id(evaluation_id)
            .exec(&txn)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("删除评价失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
