// 响应体中的业务码
//
// 0 表示成功，1xxx 为通用错误，2xxx 为评价活动相关，3xxx 为评价/提交相关。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    Forbidden = 1003,
    NotFound = 1004,
    ResourceInUse = 1009,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    CampaignInactive = 2001,
    CampaignOutOfWindow = 2002,

    ProfileNotFound = 3000,
    EvaluationAlreadySubmitted = 3002,
}
