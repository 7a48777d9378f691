mod common;

use common::*;
use rust_evalsystem::errors::EvalSystemError;
use rust_evalsystem::models::evaluations::entities::Evaluation;
use rust_evalsystem::models::evaluations::requests::{
    AspectAnswerInput, BootstrapEvaluationsRequest, SubmitEvaluationRequest,
};
use rust_evalsystem::models::generic_evaluations::requests::{
    QuestionAnswerInput, SubmitGenericEvaluationRequest,
};
use rust_evalsystem::services::evaluations::{
    bootstrap::bootstrap_evaluations, generic::submit_generic_evaluation,
    submit::submit_teacher_evaluation,
};
use rust_evalsystem::services::results::{dashboard::campaign_dashboard, teacher::teacher_results};
use rust_evalsystem::storage::{SeaOrmRosterSource, SeaOrmStorage};

async fn bootstrap(
    storage: &SeaOrmStorage,
    roster: &SeaOrmRosterSource,
    student_id: &str,
    campaign_id: i64,
) -> Vec<Evaluation> {
    let req = BootstrapEvaluationsRequest {
        student_id: student_id.to_string(),
        campaign_id,
        roles: vec!["student".to_string()],
    };
    bootstrap_evaluations(storage, roster, &req, today(), false)
        .await
        .unwrap()
        .created
}

async fn submit(
    storage: &SeaOrmStorage,
    evaluation_id: i64,
    comment: Option<&str>,
    ratings: &[(i64, i64)],
) {
    submit_teacher_evaluation(
        storage,
        SubmitEvaluationRequest {
            evaluation_id,
            general_comment: comment.map(str::to_string),
            details: ratings
                .iter()
                .map(|(aspect_id, valuation_id)| AspectAnswerInput {
                    aspect_id: *aspect_id,
                    valuation_id: *valuation_id,
                    comment: None,
                })
                .collect(),
        },
    )
    .await
    .unwrap();
}

fn by_teacher(evaluations: &[Evaluation], teacher_id: &str) -> i64 {
    evaluations
        .iter()
        .find(|e| e.teacher_id == teacher_id)
        .map(|e| e.id)
        .unwrap()
}

#[tokio::test]
async fn test_dashboard_and_teacher_results() {
    let (storage, roster) = setup().await;
    let fixture = configured_campaign(&storage, true).await;
    let db = storage.connection();
    add_roster_row(db, "S1", Some("MAT101"), "T1").await;
    add_roster_row(db, "S1", Some("FIS201"), "T2").await;
    add_roster_row(db, "S2", Some("MAT101"), "T1").await;

    let s1 = bootstrap(&storage, &roster, "S1", fixture.campaign.id).await;
    let s2 = bootstrap(&storage, &roster, "S2", fixture.campaign.id).await;

    // 评分等级按权重降序：4, 3, 2, 1
    let (excelente, bueno, aceptable) = (
        fixture.valuation_ids[0],
        fixture.valuation_ids[1],
        fixture.valuation_ids[2],
    );
    let (first, second) = (fixture.aspect_ids[0], fixture.aspect_ids[1]);

    submit(
        &storage,
        by_teacher(&s1, "T1"),
        Some("Explica muy bien"),
        &[(first, excelente), (second, bueno)],
    )
    .await;
    submit(
        &storage,
        by_teacher(&s2, "T1"),
        Some("   "),
        &[(first, aceptable), (second, excelente)],
    )
    .await;

    let dashboard = campaign_dashboard(&storage, fixture.campaign.id)
        .await
        .unwrap();
    assert_eq!(dashboard.total_evaluations, 3);
    assert_eq!(dashboard.submitted_evaluations, 2);
    assert_eq!(dashboard.pending_evaluations, 1);
    assert_eq!(dashboard.submission_rate, 66.67);
    assert_eq!(dashboard.distinct_students, 2);
    assert_eq!(dashboard.distinct_teachers, 2);
    assert_eq!(dashboard.generic_submissions, 0);

    let results = teacher_results(&storage, fixture.campaign.id, "T1")
        .await
        .unwrap();
    assert_eq!(results.submitted_evaluations, 2);
    assert_eq!(results.overall_average, Some(3.25));
    assert_eq!(results.comments, vec!["Explica muy bien"]);

    // 按活动中的显示顺序排列
    assert_eq!(results.aspects.len(), 2);
    assert_eq!(results.aspects[0].aspect_id, second);
    assert_eq!(results.aspects[0].average_weight, Some(3.5));
    assert_eq!(results.aspects[1].aspect_id, first);
    assert_eq!(results.aspects[1].average_weight, Some(3.0));
    assert_eq!(results.aspects[1].responses, 2);

    // 未提交的评价不计入
    let pending = teacher_results(&storage, fixture.campaign.id, "T2")
        .await
        .unwrap();
    assert_eq!(pending.submitted_evaluations, 0);
    assert_eq!(pending.overall_average, None);
    assert!(pending.aspects.is_empty());
}

#[tokio::test]
async fn test_dashboard_for_generic_campaign() {
    let (storage, _) = setup().await;
    let fixture = configured_campaign(&storage, false).await;

    for student in ["S1", "S2", "S3"] {
        submit_generic_evaluation(
            &storage,
            SubmitGenericEvaluationRequest {
                campaign_id: fixture.campaign.id,
                student_id: student.to_string(),
                general_comment: None,
                aspects: vec![],
                answers: vec![QuestionAnswerInput {
                    question_id: fixture.question_ids[1],
                    answer: "Ingeniería".to_string(),
                }],
            },
            today(),
            false,
        )
        .await
        .unwrap();
    }

    let dashboard = campaign_dashboard(&storage, fixture.campaign.id)
        .await
        .unwrap();
    assert_eq!(dashboard.total_evaluations, 0);
    assert_eq!(dashboard.submission_rate, 0.0);
    assert_eq!(dashboard.generic_submissions, 3);
}

#[tokio::test]
async fn test_results_for_unknown_campaign() {
    let (storage, _) = setup().await;

    let err = campaign_dashboard(&storage, 77).await.unwrap_err();
    assert!(matches!(err, EvalSystemError::NotFound(_)));

    let err = teacher_results(&storage, 77, "T1").await.unwrap_err();
    assert!(matches!(err, EvalSystemError::NotFound(_)));
}
