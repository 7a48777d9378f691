use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{EvalSystemError, Result};
use crate::models::questions::entities::QuestionType;

// 评价活动（一段时间内开放的评价配置）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campaign.ts")]
pub struct Campaign {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    // 写入时推导，之后不会自动重新计算
    pub active: bool,
    // false 表示通用问卷，不按课程生成评价
    pub teacher_evaluation: bool,
    pub form_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Campaign {
    /// 写入时推导 active：开始日期等于今天
    pub fn derive_active(start_date: NaiveDate, today: NaiveDate) -> bool {
        start_date == today
    }

    /// 今天是否在 [start_date, end_date] 内（按天，闭区间）
    pub fn is_within_window(&self, today: NaiveDate) -> bool {
        self.start_date <= today && today <= self.end_date
    }

    /// 检查活动当前是否可以参与
    ///
    /// `skip_window_check` 对应开发环境的时间窗口绕过开关，不影响 active 检查。
    pub fn ensure_open(&self, today: NaiveDate, skip_window_check: bool) -> Result<()> {
        if !self.active {
            return Err(EvalSystemError::inactive(format!(
                "Campaign {} is not active",
                self.id
            )));
        }
        if !skip_window_check && !self.is_within_window(today) {
            return Err(EvalSystemError::out_of_window(format!(
                "Campaign {} is only open from {} to {}",
                self.id, self.start_date, self.end_date
            )));
        }
        Ok(())
    }
}

// 活动中已配置的评价维度
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campaign.ts")]
pub struct ConfiguredAspect {
    pub config_id: i64,
    pub aspect_id: i64,
    pub label: String,
    pub description: Option<String>,
    pub display_order: i32,
    pub active: bool,
}

// 活动中已配置的评分等级
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campaign.ts")]
pub struct ConfiguredValuation {
    pub config_id: i64,
    pub valuation_id: i64,
    pub label: String,
    pub weight: f64,
    pub display_order: i32,
    pub active: bool,
}

// 活动中已配置的开放问题
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/campaign.ts")]
pub struct ConfiguredQuestion {
    pub config_id: i64,
    pub question_id: i64,
    pub text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub display_order: i32,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn campaign(active: bool, start: NaiveDate, end: NaiveDate) -> Campaign {
        Campaign {
            id: 7,
            name: "2025-I".to_string(),
            description: None,
            start_date: start,
            end_date: end,
            active,
            teacher_evaluation: true,
            form_url: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_derive_active_only_on_start_day() {
        let today = date(2025, 3, 10);
        assert!(Campaign::derive_active(today, today));
        assert!(!Campaign::derive_active(date(2025, 3, 9), today));
        assert!(!Campaign::derive_active(date(2025, 3, 11), today));
    }

    #[test]
    fn test_window_is_inclusive() {
        let c = campaign(true, date(2025, 3, 1), date(2025, 3, 31));
        assert!(c.is_within_window(date(2025, 3, 1)));
        assert!(c.is_within_window(date(2025, 3, 31)));
        assert!(!c.is_within_window(date(2025, 2, 28)));
        assert!(!c.is_within_window(date(2025, 4, 1)));
    }

    #[test]
    fn test_inactive_wins_over_window_bypass() {
        let c = campaign(false, date(2025, 3, 1), date(2025, 3, 31));
        let err = c.ensure_open(date(2025, 3, 15), true).unwrap_err();
        assert_eq!(err, EvalSystemError::inactive("Campaign 7 is not active"));
    }

    #[test]
    fn test_out_of_window_unless_bypassed() {
        let c = campaign(true, date(2025, 3, 1), date(2025, 3, 31));
        let err = c.ensure_open(date(2025, 5, 1), false).unwrap_err();
        assert_eq!(err.code(), "E009");
        assert!(c.ensure_open(date(2025, 5, 1), true).is_ok());
        assert!(c.ensure_open(date(2025, 3, 20), false).is_ok());
    }
}
