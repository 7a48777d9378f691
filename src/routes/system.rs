use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use ts_rs::TS;

use crate::models::{ApiResponse, AppStartTime};

// 服务状态
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub version: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub uptime_secs: i64,
}

pub async fn health(start_time: web::Data<AppStartTime>) -> ActixResult<HttpResponse> {
    let started_at = start_time.start_datetime;
    let uptime_secs = (chrono::Utc::now() - started_at).num_seconds();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        HealthResponse {
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at,
            uptime_secs,
        },
        "Service is running",
    )))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/system").route("/health", web::get().to(health)));
}
