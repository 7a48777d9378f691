//! 统计查询

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::{Aspects, EvaluationDetails, Evaluations, ValuationScales};
use crate::entity::{evaluation_details, evaluations, valuation_scales};
use crate::errors::{EvalSystemError, Result};
use crate::models::results::entities::ScoredDetail;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 教师在活动中已提交评价的维度评分
    pub async fn list_teacher_scored_details_impl(
        &self,
        campaign_id: i64,
        teacher_id: &str,
    ) -> Result<Vec<ScoredDetail>> {
        let evaluation_ids: Vec<i64> = Evaluations::find()
            .filter(evaluations::Column::CampaignId.eq(campaign_id))
            .filter(evaluations::Column::TeacherId.eq(teacher_id))
            .filter(evaluations::Column::SubmittedAt.is_not_null())
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询教师评价失败: {e}")))?
            .into_iter()
            .map(|m| m.id)
            .collect();

        if evaluation_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = EvaluationDetails::find()
            .filter(evaluation_details::Column::EvaluationId.is_in(evaluation_ids))
            .order_by_asc(evaluation_details::Column::Id)
            .find_also_related(Aspects)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评价明细失败: {e}")))?;

        let valuation_ids: Vec<i64> = rows.iter().map(|(d, _)| d.valuation_id).collect();
        let weights: HashMap<i64, f64> = ValuationScales::find()
            .filter(valuation_scales::Column::Id.is_in(valuation_ids))
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询评分等级失败: {e}")))?
            .into_iter()
            .map(|v| (v.id, v.weight))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|(detail, aspect)| {
                let aspect = aspect?;
                let weight = *weights.get(&detail.valuation_id)?;
                Some(ScoredDetail {
                    evaluation_id: detail.evaluation_id,
                    aspect_id: aspect.id,
                    aspect_label: aspect.label,
                    weight,
                    comment: detail.comment,
                })
            })
            .collect())
    }
}
