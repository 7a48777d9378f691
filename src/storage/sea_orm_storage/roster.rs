//! 教务花名册数据源

use super::{SeaOrmStorage, connect, redact_database_url};
use crate::config::AppConfig;
use crate::entity::academic_roster::{Column, Entity as AcademicRoster};
use crate::errors::{EvalSystemError, Result};
use crate::models::roster::entities::RosterEntry;
use crate::storage::RosterSource;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::info;

/// 基于 SeaORM 的花名册查询（只读）
#[derive(Clone)]
pub struct SeaOrmRosterSource {
    db: DatabaseConnection,
}

impl SeaOrmRosterSource {
    /// 配置了 `database.academic_url` 时单独建立连接，否则复用评价数据库
    pub async fn new_async(storage: &SeaOrmStorage) -> Result<Self> {
        let config = AppConfig::get();
        match config.academic_database_url() {
            Some(url) => {
                let db = connect(url, config).await?;
                info!(
                    "Academic roster database connected: {}",
                    redact_database_url(url)
                );
                Ok(Self { db })
            }
            None => Ok(Self {
                db: storage.db.clone(),
            }),
        }
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RosterSource for SeaOrmRosterSource {
    async fn list_student_roster(&self, student_id: &str) -> Result<Vec<RosterEntry>> {
        let rows = AcademicRoster::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EvalSystemError::database_operation(format!("查询教务花名册失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_roster_entry()).collect())
    }
}
