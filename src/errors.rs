//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，每个错误种类在一张表里同时声明
//! 错误代码、类型名称、HTTP 状态码和 API 业务码。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - http_status() 方法 - 返回对应的 HTTP 状态码
/// - api_code() 方法 - 返回响应体中的业务码
/// - 便捷构造函数
macro_rules! define_evalsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident, $api:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum EvalSystemError {
            $($variant(String),)*
        }

        impl EvalSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EvalSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EvalSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EvalSystemError::$variant(msg) => msg,)*
                }
            }

            /// 获取 HTTP 状态码
            pub fn http_status(&self) -> StatusCode {
                match self {
                    $(EvalSystemError::$variant(_) => StatusCode::$status,)*
                }
            }

            /// 获取 API 业务码
            pub fn api_code(&self) -> ErrorCode {
                match self {
                    $(EvalSystemError::$variant(_) => ErrorCode::$api,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EvalSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EvalSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_evalsystem_errors! {
    DatabaseConfig("E001", "Database Configuration Error", INTERNAL_SERVER_ERROR, InternalServerError),
    DatabaseConnection("E002", "Database Connection Error", INTERNAL_SERVER_ERROR, InternalServerError),
    DatabaseOperation("E003", "Database Operation Error", INTERNAL_SERVER_ERROR, InternalServerError),
    Serialization("E004", "Serialization Error", INTERNAL_SERVER_ERROR, InternalServerError),
    Validation("E005", "Validation Error", BAD_REQUEST, BadRequest),
    Authorization("E006", "Authorization Error", FORBIDDEN, Forbidden),
    NotFound("E007", "Resource Not Found", NOT_FOUND, NotFound),
    Inactive("E008", "Campaign Inactive", FORBIDDEN, CampaignInactive),
    OutOfWindow("E009", "Campaign Out Of Window", FORBIDDEN, CampaignOutOfWindow),
    ProfileNotFound("E010", "Student Profile Not Found", NOT_FOUND, ProfileNotFound),
    AlreadySubmitted("E011", "Evaluation Already Submitted", CONFLICT, EvaluationAlreadySubmitted),
    InUse("E012", "Resource In Use", CONFLICT, ResourceInUse),
}

impl EvalSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为服务端内部错误（需要 error 级别日志）
    pub fn is_internal(&self) -> bool {
        self.http_status().is_server_error()
    }
}

impl fmt::Display for EvalSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EvalSystemError {}

impl ResponseError for EvalSystemError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.http_status())
            .json(ApiResponse::error_empty(self.api_code(), self.message()))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EvalSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        EvalSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EvalSystemError {
    fn from(err: serde_json::Error) -> Self {
        EvalSystemError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EvalSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EvalSystemError::database_config("test").code(), "E001");
        assert_eq!(EvalSystemError::validation("test").code(), "E005");
        assert_eq!(EvalSystemError::not_found("test").code(), "E007");
        assert_eq!(EvalSystemError::out_of_window("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EvalSystemError::inactive("test").error_type(),
            "Campaign Inactive"
        );
        assert_eq!(
            EvalSystemError::profile_not_found("test").error_type(),
            "Student Profile Not Found"
        );
    }

    #[test]
    fn test_workflow_errors_map_to_status() {
        assert_eq!(
            EvalSystemError::not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EvalSystemError::inactive("x").http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            EvalSystemError::out_of_window("x").http_status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            EvalSystemError::profile_not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EvalSystemError::already_submitted("x").http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            EvalSystemError::in_use("x").http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            EvalSystemError::database_operation("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_codes() {
        assert_eq!(
            EvalSystemError::out_of_window("x").api_code(),
            ErrorCode::CampaignOutOfWindow
        );
        assert_eq!(
            EvalSystemError::profile_not_found("x").api_code(),
            ErrorCode::ProfileNotFound
        );
    }

    #[test]
    fn test_is_internal() {
        assert!(EvalSystemError::database_connection("down").is_internal());
        assert!(!EvalSystemError::validation("bad").is_internal());
    }

    #[test]
    fn test_format_simple() {
        let err = EvalSystemError::validation("end_date must not precede start_date");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("end_date must not precede start_date"));
    }

    #[test]
    fn test_db_err_conversion() {
        let err: EvalSystemError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("boom"));
    }
}
