use serde::Deserialize;
use ts_rs::TS;

// 初始化学生在某活动中的评价
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct BootstrapEvaluationsRequest {
    pub student_id: String,
    pub campaign_id: i64,
    #[serde(default)]
    pub roles: Vec<String>,
}

// 单个维度的评分
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct AspectAnswerInput {
    #[serde(rename = "aspectoId")]
    pub aspect_id: i64,
    #[serde(rename = "valoracionId")]
    pub valuation_id: i64,
    #[serde(rename = "comentario")]
    pub comment: Option<String>,
}

// 提交教师评价
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct SubmitEvaluationRequest {
    #[serde(rename = "evaluacionId")]
    pub evaluation_id: i64,
    #[serde(rename = "comentarioGeneral")]
    pub general_comment: Option<String>,
    #[serde(rename = "detalles")]
    pub details: Vec<AspectAnswerInput>,
}

// 评价列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationListQuery {
    pub student_id: String,
    pub campaign_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_requests_share_camel_case() {
        let query: EvaluationListQuery =
            serde_json::from_str(r#"{"studentId": "S1", "campaignId": 4}"#).unwrap();
        assert_eq!(query.student_id, "S1");
        assert_eq!(query.campaign_id, Some(4));

        let bootstrap: BootstrapEvaluationsRequest =
            serde_json::from_str(r#"{"studentId": "S1", "campaignId": 4}"#).unwrap();
        assert_eq!(bootstrap.campaign_id, 4);
        assert!(bootstrap.roles.is_empty());

        assert!(serde_json::from_str::<EvaluationListQuery>(r#"{"student_id": "S1"}"#).is_err());
    }
}
