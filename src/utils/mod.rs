pub mod extractor;
pub mod parameter_error_handler;
pub mod validate;

pub use extractor::{SafeCampaignIdI64, SafeEvaluationIdI64, SafeIDI64, SafeTeacherId};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;

/// 服务器本地时区的当前日期
///
/// 活动的开始、结束日期按本地日历天比较。
pub fn local_today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
