/*!
 * 速率限制中间件
 *
 * 限制提交类接口的请求频率，避免脚本反复提交或枚举评价。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::RateLimit;
 *
 * App::new()
 *     .service(
 *         web::resource("/api/v1/evaluations/submit")
 *             .wrap(RateLimit::submission(20))  // 20次/分钟
 *             .route(web::post().to(submit_handler))
 *     )
 * ```
 *
 * ## 限制规则
 *
 * - 使用客户端 IP 作为限制键，按前缀区分端点
 * - 计数在固定窗口（60 秒）后过期
 * - 超过限制返回 429 Too Many Requests
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

const WINDOW_SECS: u64 = 60;

/// 全局速率限制缓存
/// 键: 前缀:ip，值: 窗口内请求计数
static RATE_LIMIT_CACHE: Lazy<Cache<String, u32>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(WINDOW_SECS))
        .max_capacity(100_000)
        .build()
});

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
}

impl RateLimit {
    /// 创建新的速率限制器，窗口固定为 60 秒
    pub fn new(max_requests: u32) -> Self {
        Self {
            max_requests: max_requests.max(1),
            key_prefix: String::new(),
        }
    }

    /// 设置限制键前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 教师评价提交
    pub fn submission(max_requests: u32) -> Self {
        Self::new(max_requests).with_prefix("submit")
    }

    /// 通用问卷提交
    pub fn generic_submission(max_requests: u32) -> Self {
        Self::new(max_requests).with_prefix("generic_submit")
    }

    /// 评价初始化：30次/分钟/IP
    pub fn bootstrap() -> Self {
        Self::new(30).with_prefix("bootstrap")
    }

    fn cache_key(&self, client_ip: &str) -> String {
        if self.key_prefix.is_empty() {
            format!("ip:{client_ip}")
        } else {
            format!("{}:ip:{}", self.key_prefix, client_ip)
        }
    }
}

/// 从请求中提取客户端 IP
///
/// 优先使用连接信息，其次是 X-Forwarded-For 的第一个地址和 X-Real-IP。
/// 部署在反向代理后面时需要代理正确设置这些头。
fn extract_client_ip(req: &ServiceRequest) -> String {
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

/// 创建速率限制错误响应
fn create_rate_limit_response(limit: u32) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", WINDOW_SECS.to_string()))
        .insert_header(("X-RateLimit-Limit", limit.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            limit: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    limit: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let limit = self.limit.clone();

        Box::pin(async move {
            let cache_key = limit.cache_key(&extract_client_ip(&req));
            let current_count = RATE_LIMIT_CACHE.get(&cache_key).await.unwrap_or(0);

            if current_count >= limit.max_requests {
                warn!(
                    "Rate limit exceeded for key: {} (count: {}/{})",
                    cache_key, current_count, limit.max_requests
                );
                return Ok(req.into_response(
                    create_rate_limit_response(limit.max_requests).map_into_right_body(),
                ));
            }

            RATE_LIMIT_CACHE
                .insert(cache_key, current_count + 1)
                .await;

            let remaining = limit.max_requests.saturating_sub(current_count + 1);
            let mut res = srv.call(req).await?.map_into_left_body();
            let headers = res.headers_mut();
            headers.insert(
                HeaderName::from_static("x-ratelimit-limit"),
                HeaderValue::from(limit.max_requests),
            );
            headers.insert(
                HeaderName::from_static("x-ratelimit-remaining"),
                HeaderValue::from(remaining),
            );
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test as atest, web};

    #[test]
    fn test_rate_limit_presets() {
        let submit = RateLimit::submission(20);
        assert_eq!(submit.max_requests, 20);
        assert_eq!(submit.key_prefix, "submit");

        let generic = RateLimit::generic_submission(5);
        assert_eq!(generic.key_prefix, "generic_submit");

        let bootstrap = RateLimit::bootstrap();
        assert_eq!(bootstrap.max_requests, 30);

        // 0 会被提升为 1，避免把接口完全关闭
        assert_eq!(RateLimit::new(0).max_requests, 1);
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(RateLimit::new(1).cache_key("10.0.0.1"), "ip:10.0.0.1");
        assert_eq!(
            RateLimit::submission(1).cache_key("10.0.0.1"),
            "submit:ip:10.0.0.1"
        );
    }

    #[actix_web::test]
    async fn test_requests_over_limit_are_rejected() {
        let app = atest::init_service(
            App::new().service(
                web::resource("/limited")
                    .wrap(RateLimit::new(2).with_prefix("test_over_limit"))
                    .route(web::post().to(HttpResponse::Ok)),
            ),
        )
        .await;

        for expected_remaining in ["1", "0"] {
            let req = atest::TestRequest::post().uri("/limited").to_request();
            let res = atest::call_service(&app, req).await;
            assert!(res.status().is_success());
            assert_eq!(
                res.headers().get("x-ratelimit-remaining").unwrap(),
                expected_remaining
            );
        }

        let req = atest::TestRequest::post().uri("/limited").to_request();
        let res = atest::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::TOO_MANY_REQUESTS);
    }
}
