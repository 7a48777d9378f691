use super::entities::QuestionType;
use serde::Deserialize;
use ts_rs::TS;

// 创建问题请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct CreateQuestionRequest {
    pub text: String,
    pub question_type: QuestionType,
    #[serde(default)]
    pub options: Vec<String>,
}

// 更新问题请求，修改类型或选项时两者会一起重新校验
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct UpdateQuestionRequest {
    pub text: Option<String>,
    pub question_type: Option<QuestionType>,
    pub options: Option<Vec<String>>,
}
