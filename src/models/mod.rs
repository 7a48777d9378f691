pub mod aspects;
pub mod campaigns;
pub mod common;
pub mod evaluations;
pub mod generic_evaluations;
pub mod questions;
pub mod results;
pub mod roster;
pub mod valuations;

pub use common::{ApiResponse, ErrorCode};

// 程序启动时间，健康检查据此计算运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
