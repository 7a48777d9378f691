use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::valuations::requests::CreateValuationRequest;
use crate::storage::{RosterSource, Storage};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub roster: Arc<dyn RosterSource>,
}

// 默认评分等级：(名称, 权重)
const DEFAULT_SCALE: [(&str, f64); 4] = [
    ("Excelente", 4.0),
    ("Bueno", 3.0),
    ("Aceptable", 2.0),
    ("Deficiente", 1.0),
];

/// 评分等级表为空时写入默认等级，返回写入的条数
pub async fn seed_default_scale(storage: &dyn Storage) -> Result<usize> {
    let count = storage.count_valuations().await?;
    if count > 0 {
        debug!(
            "Valuation scale already has {} entries, skipping seed",
            count
        );
        return Ok(0);
    }

    for (label, weight) in DEFAULT_SCALE {
        storage
            .create_valuation(CreateValuationRequest {
                label: label.to_string(),
                weight,
                description: None,
            })
            .await?;
    }
    info!("Default valuation scale seeded ({} entries)", DEFAULT_SCALE.len());

    Ok(DEFAULT_SCALE.len())
}

/// 准备服务器启动的上下文
/// 包括评价数据库、教务花名册数据源和初始数据
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let (storage, roster) = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    let config = AppConfig::get();
    if config.evaluation.seed_default_scale {
        if let Err(e) = seed_default_scale(storage.as_ref()).await {
            warn!("Failed to seed default valuation scale: {}", e);
        }
    }

    if config.evaluation.skip_window_check {
        warn!("Campaign window check is DISABLED, do not use this setting in production");
    }

    StartupContext { storage, roster }
}
