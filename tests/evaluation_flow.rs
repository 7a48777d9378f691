mod common;

use common::*;
use rust_evalsystem::errors::EvalSystemError;
use rust_evalsystem::models::evaluations::requests::{
    AspectAnswerInput, BootstrapEvaluationsRequest, SubmitEvaluationRequest,
};
use rust_evalsystem::models::generic_evaluations::requests::{
    QuestionAnswerInput, SubmitGenericEvaluationRequest,
};
use rust_evalsystem::models::roster::entities::RosterEntry;
use rust_evalsystem::services::evaluations::{
    bootstrap::bootstrap_evaluations, generic::submit_generic_evaluation,
    submit::submit_teacher_evaluation,
};
use rust_evalsystem::storage::Storage;

fn bootstrap_request(student_id: &str, campaign_id: i64) -> BootstrapEvaluationsRequest {
    BootstrapEvaluationsRequest {
        student_id: student_id.to_string(),
        campaign_id,
        roles: vec!["Estudiante".to_string()],
    }
}

fn answer(aspect_id: i64, valuation_id: i64) -> AspectAnswerInput {
    AspectAnswerInput {
        aspect_id,
        valuation_id,
        comment: None,
    }
}

fn roster_entry(student_id: &str, course: &str, teacher: &str) -> RosterEntry {
    RosterEntry {
        student_id: student_id.to_string(),
        course_code: Some(course.to_string()),
        course_name: None,
        teacher_id: teacher.to_string(),
        teacher_name: None,
    }
}

#[tokio::test]
async fn test_bootstrap_creates_each_course_once() {
    let (storage, roster) = setup().await;
    let fixture = configured_campaign(&storage, true).await;
    let db = storage.connection();
    add_roster_row(db, "S1", Some("MAT101"), "T1").await;
    add_roster_row(db, "S1", Some("FIS201"), "T2").await;
    add_roster_row(db, "S1", None, "T3").await;
    add_roster_row(db, "S1", Some("  "), "T4").await;
    add_roster_row(db, "S2", Some("MAT101"), "T1").await;

    let req = bootstrap_request("S1", fixture.campaign.id);
    let first = bootstrap_evaluations(&storage, &roster, &req, today(), false)
        .await
        .unwrap();
    assert_eq!(first.created.len(), 2);
    assert!(!first.is_generic_evaluation);
    assert_eq!(first.aspects.len(), 2);
    assert_eq!(first.valuations.len(), 4);
    assert!(first.created.iter().all(|e| !e.submitted));

    let mut courses: Vec<&str> = first.created.iter().map(|e| e.course_code.as_str()).collect();
    courses.sort();
    assert_eq!(courses, vec!["FIS201", "MAT101"]);

    let second = bootstrap_evaluations(&storage, &roster, &req, today(), false)
        .await
        .unwrap();
    assert!(second.created.is_empty());

    let stored = storage
        .list_student_evaluations("S1", Some(fixture.campaign.id))
        .await
        .unwrap();
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn test_generic_campaign_skips_roster() {
    let (storage, _) = setup().await;
    let fixture = configured_campaign(&storage, false).await;
    let roster = CountingRoster::new(vec![roster_entry("S1", "MAT101", "T1")]);

    let response = bootstrap_evaluations(
        &storage,
        &roster,
        &bootstrap_request("S1", fixture.campaign.id),
        today(),
        false,
    )
    .await
    .unwrap();

    assert!(response.is_generic_evaluation);
    assert!(response.created.is_empty());
    assert_eq!(response.aspects.len(), 2);
    assert_eq!(roster.calls(), 0);
}

#[tokio::test]
async fn test_bootstrap_without_roster_rows() {
    let (storage, _) = setup().await;
    let fixture = configured_campaign(&storage, true).await;
    let roster = CountingRoster::new(vec![roster_entry("S2", "MAT101", "T1")]);

    let err = bootstrap_evaluations(
        &storage,
        &roster,
        &bootstrap_request("S1", fixture.campaign.id),
        today(),
        false,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, EvalSystemError::ProfileNotFound(_)));
    assert_eq!(roster.calls(), 1);
}

#[tokio::test]
async fn test_bootstrap_requires_student_or_admin_role() {
    let (storage, _) = setup().await;
    let fixture = configured_campaign(&storage, true).await;
    let roster = CountingRoster::new(vec![roster_entry("S1", "MAT101", "T1")]);

    for roles in [vec![], vec!["docente".to_string()]] {
        let req = BootstrapEvaluationsRequest {
            roles,
            ..bootstrap_request("S1", fixture.campaign.id)
        };
        let err = bootstrap_evaluations(&storage, &roster, &req, today(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, EvalSystemError::Authorization(_)));
    }

    let admin = BootstrapEvaluationsRequest {
        roles: vec!["ADMIN".to_string()],
        ..bootstrap_request("S1", fixture.campaign.id)
    };
    assert!(
        bootstrap_evaluations(&storage, &roster, &admin, today(), false)
            .await
            .is_ok()
    );
    assert_eq!(roster.calls(), 1);
}

#[tokio::test]
async fn test_bootstrap_unknown_campaign() {
    let (storage, roster) = setup().await;

    let err = bootstrap_evaluations(&storage, &roster, &bootstrap_request("S1", 404), today(), false)
        .await
        .unwrap_err();

    assert!(matches!(err, EvalSystemError::NotFound(_)));
}

#[tokio::test]
async fn test_bootstrap_inactive_campaign() {
    let (storage, _) = setup().await;
    let campaign = create_campaign(&storage, true, Some(false)).await;
    let roster = CountingRoster::new(vec![roster_entry("S1", "MAT101", "T1")]);
    let req = bootstrap_request("S1", campaign.id);

    let err = bootstrap_evaluations(&storage, &roster, &req, today(), false)
        .await
        .unwrap_err();
    assert!(matches!(err, EvalSystemError::Inactive(_)));

    // 跳过时间窗口不影响启用检查
    let err = bootstrap_evaluations(&storage, &roster, &req, today(), true)
        .await
        .unwrap_err();
    assert!(matches!(err, EvalSystemError::Inactive(_)));
    assert_eq!(roster.calls(), 0);
}

#[tokio::test]
async fn test_bootstrap_outside_window() {
    let (storage, _) = setup().await;
    let fixture = configured_campaign(&storage, true).await;
    let roster = CountingRoster::new(vec![roster_entry("S1", "MAT101", "T1")]);
    let req = bootstrap_request("S1", fixture.campaign.id);

    for day in [date(2025, 3, 9), date(2025, 4, 1)] {
        let err = bootstrap_evaluations(&storage, &roster, &req, day, false)
            .await
            .unwrap_err();
        assert!(matches!(err, EvalSystemError::OutOfWindow(_)));
    }

    let response = bootstrap_evaluations(&storage, &roster, &req, date(2025, 4, 1), true)
        .await
        .unwrap();
    assert_eq!(response.created.len(), 1);
}

#[tokio::test]
async fn test_submit_teacher_evaluation_once() {
    let (storage, roster) = setup().await;
    let fixture = configured_campaign(&storage, true).await;
    add_roster_row(storage.connection(), "S1", Some("MAT101"), "T1").await;
    let created = bootstrap_evaluations(
        &storage,
        &roster,
        &bootstrap_request("S1", fixture.campaign.id),
        today(),
        false,
    )
    .await
    .unwrap()
    .created;
    let evaluation_id = created[0].id;

    let request = || SubmitEvaluationRequest {
        evaluation_id,
        general_comment: Some("Muy buen curso".to_string()),
        details: vec![
            answer(fixture.aspect_ids[0], fixture.valuation_ids[0]),
            AspectAnswerInput {
                comment: Some("Siempre a tiempo".to_string()),
                ..answer(fixture.aspect_ids[1], fixture.valuation_ids[1])
            },
        ],
    };

    let submitted = submit_teacher_evaluation(&storage, request()).await.unwrap();
    assert!(submitted.submitted);
    assert!(submitted.submitted_at.is_some());
    assert_eq!(submitted.general_comment.as_deref(), Some("Muy buen curso"));

    let details = storage.list_evaluation_details(evaluation_id).await.unwrap();
    assert_eq!(details.len(), 2);

    let err = submit_teacher_evaluation(&storage, request()).await.unwrap_err();
    assert!(matches!(err, EvalSystemError::AlreadySubmitted(_)));
    assert_eq!(
        storage.list_evaluation_details(evaluation_id).await.unwrap().len(),
        2
    );
}

#[tokio::test]
async fn test_submit_rejects_invalid_details() {
    let (storage, roster) = setup().await;
    let fixture = configured_campaign(&storage, true).await;
    add_roster_row(storage.connection(), "S1", Some("MAT101"), "T1").await;
    let evaluation_id = bootstrap_evaluations(
        &storage,
        &roster,
        &bootstrap_request("S1", fixture.campaign.id),
        today(),
        false,
    )
    .await
    .unwrap()
    .created[0]
        .id;

    let submit = |details: Vec<AspectAnswerInput>| SubmitEvaluationRequest {
        evaluation_id,
        general_comment: None,
        details,
    };

    let err = submit_teacher_evaluation(&storage, submit(vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, EvalSystemError::Validation(_)));

    // 停用维度不可评分
    let err = submit_teacher_evaluation(
        &storage,
        submit(vec![answer(fixture.inactive_aspect_id, fixture.valuation_ids[0])]),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EvalSystemError::Validation(_)));

    let err = submit_teacher_evaluation(
        &storage,
        submit(vec![
            answer(fixture.aspect_ids[0], fixture.valuation_ids[0]),
            answer(fixture.aspect_ids[0], fixture.valuation_ids[1]),
        ]),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EvalSystemError::Validation(_)));

    let evaluation = storage
        .get_evaluation_by_id(evaluation_id)
        .await
        .unwrap()
        .unwrap();
    assert!(!evaluation.submitted);
    assert!(storage.list_evaluation_details(evaluation_id).await.unwrap().is_empty());

    let err = submit_teacher_evaluation(
        &storage,
        SubmitEvaluationRequest {
            evaluation_id: 9999,
            general_comment: None,
            details: vec![answer(fixture.aspect_ids[0], fixture.valuation_ids[0])],
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EvalSystemError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_evaluation_removes_details() {
    let (storage, roster) = setup().await;
    let fixture = configured_campaign(&storage, true).await;
    add_roster_row(storage.connection(), "S1", Some("MAT101"), "T1").await;
    let evaluation_id = bootstrap_evaluations(
        &storage,
        &roster,
        &bootstrap_request("S1", fixture.campaign.id),
        today(),
        false,
    )
    .await
    .unwrap()
    .created[0]
        .id;
    submit_teacher_evaluation(
        &storage,
        SubmitEvaluationRequest {
            evaluation_id,
            general_comment: None,
            details: vec![answer(fixture.aspect_ids[0], fixture.valuation_ids[2])],
        },
    )
    .await
    .unwrap();

    assert!(storage.delete_evaluation(evaluation_id).await.unwrap());
    assert!(storage.get_evaluation_by_id(evaluation_id).await.unwrap().is_none());
    assert!(storage.list_evaluation_details(evaluation_id).await.unwrap().is_empty());
    assert!(!storage.delete_evaluation(evaluation_id).await.unwrap());
}

fn generic_request(fixture: &Fixture, student_id: &str, choice: &str) -> SubmitGenericEvaluationRequest {
    SubmitGenericEvaluationRequest {
        campaign_id: fixture.campaign.id,
        student_id: student_id.to_string(),
        general_comment: Some("Gracias".to_string()),
        aspects: vec![answer(fixture.aspect_ids[0], fixture.valuation_ids[1])],
        answers: vec![
            QuestionAnswerInput {
                question_id: fixture.question_ids[0],
                answer: "Más prácticas".to_string(),
            },
            QuestionAnswerInput {
                question_id: fixture.question_ids[2],
                answer: choice.to_string(),
            },
        ],
    }
}

#[tokio::test]
async fn test_generic_submission_once_per_student() {
    let (storage, _) = setup().await;
    let fixture = configured_campaign(&storage, false).await;

    let response =
        submit_generic_evaluation(&storage, generic_request(&fixture, "S1", "Sí"), today(), false)
            .await
            .unwrap();
    assert_eq!(response.aspect_answers, 1);
    assert_eq!(response.question_answers, 2);
    assert_eq!(response.evaluation.student_id, "S1");

    let err =
        submit_generic_evaluation(&storage, generic_request(&fixture, "S1", "No"), today(), false)
            .await
            .unwrap_err();
    assert!(matches!(err, EvalSystemError::AlreadySubmitted(_)));

    submit_generic_evaluation(&storage, generic_request(&fixture, "S2", "No"), today(), false)
        .await
        .unwrap();
    assert_eq!(
        storage
            .count_generic_evaluations(fixture.campaign.id)
            .await
            .unwrap(),
        2
    );
}

#[tokio::test]
async fn test_generic_submission_validation() {
    let (storage, _) = setup().await;
    let fixture = configured_campaign(&storage, false).await;

    let err = submit_generic_evaluation(
        &storage,
        generic_request(&fixture, "S1", "Tal vez"),
        today(),
        false,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EvalSystemError::Validation(_)));

    let err = submit_generic_evaluation(
        &storage,
        generic_request(&fixture, "S1", "Sí"),
        date(2025, 4, 2),
        false,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EvalSystemError::OutOfWindow(_)));

    assert!(
        storage
            .find_generic_evaluation(fixture.campaign.id, "S1")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_generic_submission_rejected_for_teacher_campaign() {
    let (storage, _) = setup().await;
    let fixture = configured_campaign(&storage, true).await;

    let err =
        submit_generic_evaluation(&storage, generic_request(&fixture, "S1", "Sí"), today(), false)
            .await
            .unwrap_err();
    assert!(matches!(err, EvalSystemError::Validation(_)));
}

#[tokio::test]
async fn test_catalog_items_with_submitted_answers_cannot_be_deleted() {
    let (storage, roster) = setup().await;
    let fixture = configured_campaign(&storage, true).await;
    add_roster_row(storage.connection(), "S1", Some("MAT101"), "T1").await;
    let evaluation_id = bootstrap_evaluations(
        &storage,
        &roster,
        &bootstrap_request("S1", fixture.campaign.id),
        today(),
        false,
    )
    .await
    .unwrap()
    .created[0]
        .id;
    submit_teacher_evaluation(
        &storage,
        SubmitEvaluationRequest {
            evaluation_id,
            general_comment: None,
            details: vec![
                answer(fixture.aspect_ids[0], fixture.valuation_ids[0]),
                answer(fixture.aspect_ids[1], fixture.valuation_ids[1]),
            ],
        },
    )
    .await
    .unwrap();

    let err = storage.delete_aspect(fixture.aspect_ids[0]).await.unwrap_err();
    assert!(matches!(err, EvalSystemError::InUse(_)));
    let err = storage
        .delete_valuation(fixture.valuation_ids[0])
        .await
        .unwrap_err();
    assert!(matches!(err, EvalSystemError::InUse(_)));

    let details = storage.list_evaluation_details(evaluation_id).await.unwrap();
    assert_eq!(details.len(), 2);
    assert!(
        storage
            .get_evaluation_by_id(evaluation_id)
            .await
            .unwrap()
            .unwrap()
            .submitted
    );
    // 活动配置也保持不变
    assert_eq!(
        storage
            .list_campaign_aspects(fixture.campaign.id, true)
            .await
            .unwrap()
            .len(),
        2
    );

    // 未被引用的条目仍可删除
    assert!(storage.delete_aspect(fixture.inactive_aspect_id).await.unwrap());
    assert!(storage.delete_valuation(fixture.valuation_ids[3]).await.unwrap());
}

#[tokio::test]
async fn test_questions_with_generic_answers_cannot_be_deleted() {
    let (storage, _) = setup().await;
    let fixture = configured_campaign(&storage, false).await;
    submit_generic_evaluation(&storage, generic_request(&fixture, "S1", "Sí"), today(), false)
        .await
        .unwrap();

    let err = storage
        .delete_question(fixture.question_ids[2])
        .await
        .unwrap_err();
    assert!(matches!(err, EvalSystemError::InUse(_)));
    let err = storage
        .delete_aspect(fixture.aspect_ids[0])
        .await
        .unwrap_err();
    assert!(matches!(err, EvalSystemError::InUse(_)));

    assert!(storage.delete_question(fixture.question_ids[1]).await.unwrap());
}

#[tokio::test]
async fn test_empty_generic_submission_is_rejected() {
    let (storage, _) = setup().await;
    let fixture = configured_campaign(&storage, false).await;

    let err = submit_generic_evaluation(
        &storage,
        SubmitGenericEvaluationRequest {
            aspects: vec![],
            answers: vec![],
            ..generic_request(&fixture, "S1", "Sí")
        },
        today(),
        false,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, EvalSystemError::Validation(_)));

    // 被拒绝的提交不占用名额
    submit_generic_evaluation(&storage, generic_request(&fixture, "S1", "Sí"), today(), false)
        .await
        .unwrap();
}
