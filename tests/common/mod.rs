#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

use rust_evalsystem::entity::academic_roster;
use rust_evalsystem::errors::Result;
use rust_evalsystem::models::aspects::requests::CreateAspectRequest;
use rust_evalsystem::models::campaigns::entities::Campaign;
use rust_evalsystem::models::campaigns::requests::{
    CampaignItem, CampaignItemsRequest, CreateCampaignRequest,
};
use rust_evalsystem::models::questions::entities::QuestionType;
use rust_evalsystem::models::questions::requests::CreateQuestionRequest;
use rust_evalsystem::models::roster::entities::RosterEntry;
use rust_evalsystem::runtime::lifetime::startup::seed_default_scale;
use rust_evalsystem::services::campaigns::{create::create_campaign_record, items};
use rust_evalsystem::services::catalog::{aspects, questions};
use rust_evalsystem::storage::{RosterSource, SeaOrmRosterSource, SeaOrmStorage, Storage};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 活动窗口内的固定日期
pub fn today() -> NaiveDate {
    date(2025, 3, 15)
}

pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn setup() -> (SeaOrmStorage, SeaOrmRosterSource) {
    let db = memory_db().await;
    let roster = SeaOrmRosterSource::from_connection(db.clone());
    (SeaOrmStorage::from_connection(db), roster)
}

pub async fn add_roster_row(
    db: &DatabaseConnection,
    student_id: &str,
    course_code: Option<&str>,
    teacher_id: &str,
) {
    academic_roster::ActiveModel {
        student_id: Set(student_id.to_string()),
        course_code: Set(course_code.map(str::to_string)),
        course_name: Set(course_code.map(|c| format!("Curso {c}"))),
        teacher_id: Set(teacher_id.to_string()),
        teacher_name: Set(Some(format!("Docente {teacher_id}"))),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn create_campaign(
    storage: &dyn Storage,
    teacher_evaluation: bool,
    active: Option<bool>,
) -> Campaign {
    create_campaign_record(
        storage,
        CreateCampaignRequest {
            name: "Evaluación 2025-I".to_string(),
            description: None,
            start_date: date(2025, 3, 10),
            end_date: date(2025, 3, 31),
            teacher_evaluation,
            form_url: None,
            active,
        },
        today(),
    )
    .await
    .unwrap()
}

/// 已配置好的活动表单
pub struct Fixture {
    pub campaign: Campaign,
    pub aspect_ids: Vec<i64>,
    pub inactive_aspect_id: i64,
    pub valuation_ids: Vec<i64>,
    pub question_ids: Vec<i64>,
}

/// 两个启用维度和一个停用维度，默认四级评分，三个问题
pub async fn configured_campaign(storage: &dyn Storage, teacher_evaluation: bool) -> Fixture {
    let campaign = create_campaign(storage, teacher_evaluation, Some(true)).await;

    let mut aspect_ids = Vec::new();
    for label in ["Dominio del tema", "Puntualidad", "Material didáctico"] {
        let aspect = aspects::create_aspect_record(
            storage,
            CreateAspectRequest {
                label: label.to_string(),
                description: None,
            },
        )
        .await
        .unwrap();
        aspect_ids.push(aspect.id);
    }
    let inactive_aspect_id = aspect_ids.pop().unwrap();

    seed_default_scale(storage).await.unwrap();
    let valuation_ids: Vec<i64> = storage
        .list_valuations()
        .await
        .unwrap()
        .iter()
        .map(|v| v.id)
        .collect();

    let mut question_ids = Vec::new();
    for (text, question_type, options) in [
        ("¿Qué mejorarías?", QuestionType::LongText, vec![]),
        ("Carrera", QuestionType::ShortText, vec![]),
        (
            "¿Recomendarías el curso?",
            QuestionType::MultipleChoice,
            vec!["Sí".to_string(), "No".to_string()],
        ),
    ] {
        let question = questions::create_question_record(
            storage,
            CreateQuestionRequest {
                text: text.to_string(),
                question_type,
                options,
            },
        )
        .await
        .unwrap();
        question_ids.push(question.id);
    }

    let item = |id: i64, order: i32, active: bool| CampaignItem {
        id,
        display_order: Some(order),
        active: Some(active),
    };
    items::configure_campaign_items(
        storage,
        campaign.id,
        CampaignItemsRequest {
            aspects: Some(vec![
                item(aspect_ids[0], 2, true),
                item(aspect_ids[1], 1, true),
                item(inactive_aspect_id, 3, false),
            ]),
            valuations: Some(
                valuation_ids
                    .iter()
                    .enumerate()
                    .map(|(i, id)| item(*id, i as i32 + 1, true))
                    .collect(),
            ),
            questions: Some(
                question_ids
                    .iter()
                    .enumerate()
                    .map(|(i, id)| item(*id, i as i32 + 1, true))
                    .collect(),
            ),
        },
    )
    .await
    .unwrap();

    Fixture {
        campaign,
        aspect_ids,
        inactive_aspect_id,
        valuation_ids,
        question_ids,
    }
}

/// 记录调用次数的花名册
pub struct CountingRoster {
    pub entries: Vec<RosterEntry>,
    pub calls: AtomicUsize,
}

impl CountingRoster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self {
            entries,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RosterSource for CountingRoster {
    async fn list_student_roster(&self, student_id: &str) -> Result<Vec<RosterEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .entries
            .iter()
            .filter(|e| e.student_id == student_id)
            .cloned()
            .collect())
    }
}
