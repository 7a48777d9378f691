//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod academic_roster;
pub mod aspects;
pub mod campaign_aspects;
pub mod campaign_questions;
pub mod campaign_valuations;
pub mod campaigns;
pub mod evaluation_details;
pub mod evaluations;
pub mod generic_aspect_answers;
pub mod generic_evaluations;
pub mod generic_question_answers;
pub mod questions;
pub mod valuation_scales;

/// Unix 秒转换为 UTC 时间
pub(crate) fn to_datetime(ts: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::<chrono::Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
