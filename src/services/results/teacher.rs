use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ResultService, round2};
use crate::errors::Result;
use crate::models::ApiResponse;
use crate::models::results::{
    entities::ScoredDetail,
    responses::{AspectResult, TeacherResultsResponse},
};
use crate::services::campaigns::get::load_campaign;
use crate::services::error_response;
use crate::storage::Storage;

pub async fn get_teacher_results(
    service: &ResultService,
    request: &HttpRequest,
    campaign_id: i64,
    teacher_id: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match teacher_results(storage.as_ref(), campaign_id, &teacher_id).await {
        Ok(results) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            results,
            "Teacher results retrieved successfully",
        ))),
        Err(e) => Ok(error_response("Teacher results", &e)),
    }
}

/// 教师在活动中的结果
///
/// 只统计已提交的评价。维度按活动配置的 display_order 排列，
/// 配置中已移除但仍有评分的维度排在最后。
pub async fn teacher_results(
    storage: &dyn Storage,
    campaign_id: i64,
    teacher_id: &str,
) -> Result<TeacherResultsResponse> {
    load_campaign(storage, campaign_id).await?;

    let submitted: Vec<_> = storage
        .list_campaign_evaluations(campaign_id)
        .await?
        .into_iter()
        .filter(|e| e.teacher_id == teacher_id && e.submitted)
        .collect();

    let scores = storage
        .list_teacher_scored_details(campaign_id, teacher_id)
        .await?;
    let configured = storage.list_campaign_aspects(campaign_id, false).await?;
    let order: Vec<i64> = configured.iter().map(|a| a.aspect_id).collect();

    let comments = submitted
        .iter()
        .filter_map(|e| e.general_comment.as_deref())
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    Ok(TeacherResultsResponse {
        campaign_id,
        teacher_id: teacher_id.to_string(),
        submitted_evaluations: submitted.len() as i64,
        overall_average: average(scores.iter().map(|s| s.weight)),
        aspects: aggregate_by_aspect(&scores, &order),
        comments,
    })
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| round2(sum / count as f64))
}

fn aggregate_by_aspect(scores: &[ScoredDetail], order: &[i64]) -> Vec<AspectResult> {
    let mut grouped: HashMap<i64, (String, Vec<f64>)> = HashMap::new();
    for score in scores {
        grouped
            .entry(score.aspect_id)
            .or_insert_with(|| (score.aspect_label.clone(), Vec::new()))
            .1
            .push(score.weight);
    }

    let position = |aspect_id: i64| {
        order
            .iter()
            .position(|id| *id == aspect_id)
            .unwrap_or(usize::MAX)
    };

    let mut results: Vec<AspectResult> = grouped
        .into_iter()
        .map(|(aspect_id, (label, weights))| AspectResult {
            aspect_id,
            label,
            responses: weights.len() as i64,
            average_weight: average(weights.into_iter()),
        })
        .collect();
    results.sort_by_key(|r| (position(r.aspect_id), r.aspect_id));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(aspect_id: i64, weight: f64) -> ScoredDetail {
        ScoredDetail {
            evaluation_id: 1,
            aspect_id,
            aspect_label: format!("A{aspect_id}"),
            weight,
            comment: None,
        }
    }

    #[test]
    fn test_average() {
        assert_eq!(average([4.0, 3.0, 3.0].into_iter()), Some(3.33));
        assert_eq!(average(std::iter::empty()), None);
    }

    #[test]
    fn test_aggregate_follows_display_order() {
        let scores = vec![score(1, 4.0), score(2, 2.0), score(1, 3.0), score(9, 1.0)];
        let results = aggregate_by_aspect(&scores, &[2, 1]);

        let ids: Vec<i64> = results.iter().map(|r| r.aspect_id).collect();
        assert_eq!(ids, vec![2, 1, 9]);
        assert_eq!(results[1].responses, 2);
        assert_eq!(results[1].average_weight, Some(3.5));
    }
}
