//! 路径参数安全提取器
//!
//! 解析失败时直接返回 400 和统一的响应体，handler 无需再做校验。

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_person_id;

fn bad_request(message: String) -> actix_web::Error {
    InternalError::from_response(
        message.clone(),
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// 定义正整数 ID 提取器的宏
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(bad_request(format!(
                        "Invalid path parameter '{}': expected a positive integer",
                        $param
                    ))),
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeCampaignIdI64, "campaign_id");
define_safe_i64_extractor!(SafeEvaluationIdI64, "evaluation_id");

/// 教师编号提取器
#[derive(Debug, Clone)]
pub struct SafeTeacherId(pub String);

impl FromRequest for SafeTeacherId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("teacher_id").unwrap_or_default();
        ready(match validate_person_id(raw) {
            Ok(()) => Ok(SafeTeacherId(raw.to_string())),
            Err(msg) => Err(bad_request(format!(
                "Invalid path parameter 'teacher_id': {msg}"
            ))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_positive_id_is_extracted() {
        let req = TestRequest::default()
            .param("campaign_id", "42")
            .to_http_request();
        let id = SafeCampaignIdI64::extract(&req).await.unwrap();
        assert_eq!(id.0, 42);
    }

    #[actix_web::test]
    async fn test_invalid_id_is_rejected() {
        for raw in ["0", "-3", "abc"] {
            let req = TestRequest::default()
                .param("evaluation_id", raw)
                .to_http_request();
            assert!(SafeEvaluationIdI64::extract(&req).await.is_err());
        }
    }

    #[actix_web::test]
    async fn test_teacher_id() {
        let req = TestRequest::default()
            .param("teacher_id", "T-01")
            .to_http_request();
        assert_eq!(SafeTeacherId::extract(&req).await.unwrap().0, "T-01");

        let req = TestRequest::default()
            .param("teacher_id", "bad id")
            .to_http_request();
        assert!(SafeTeacherId::extract(&req).await.is_err());
    }
}
