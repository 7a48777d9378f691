use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CatalogService;
use crate::errors::{EvalSystemError, Result};
use crate::models::ApiResponse;
use crate::models::questions::{
    entities::{Question, QuestionType},
    requests::{CreateQuestionRequest, UpdateQuestionRequest},
    responses::QuestionListResponse,
};
use crate::services::error_response;
use crate::storage::Storage;

fn not_found(id: i64) -> EvalSystemError {
    EvalSystemError::not_found(format!("Question {id} not found"))
}

fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(EvalSystemError::validation("Question text must not be empty"));
    }
    Ok(())
}

pub async fn list_questions(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).list_questions().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuestionListResponse { items },
            "Questions retrieved successfully",
        ))),
        Err(e) => Ok(error_response("List questions", &e)),
    }
}

pub async fn create_question(
    service: &CatalogService,
    request: &HttpRequest,
    question: CreateQuestionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match create_question_record(storage.as_ref(), question).await {
        Ok(question) => {
            info!("Question {} ({}) created", question.id, question.question_type);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                question,
                "Question created successfully",
            )))
        }
        Err(e) => Ok(error_response("Create question", &e)),
    }
}

/// 创建问题，单选题必须带非空选项，其他类型不能带选项
pub async fn create_question_record(
    storage: &dyn Storage,
    mut question: CreateQuestionRequest,
) -> Result<Question> {
    validate_text(&question.text)?;
    question.options = normalize_options(question.options);
    question
        .question_type
        .validate_options(&question.options)
        .map_err(EvalSystemError::validation)?;

    question.text = question.text.trim().to_string();
    storage.create_question(question).await
}

pub async fn get_question(
    service: &CatalogService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).get_question_by_id(id).await {
        Ok(Some(question)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            question,
            "Question retrieved successfully",
        ))),
        Ok(None) => Ok(error_response("Get question", &not_found(id))),
        Err(e) => Ok(error_response("Get question", &e)),
    }
}

pub async fn update_question(
    service: &CatalogService,
    request: &HttpRequest,
    id: i64,
    update: UpdateQuestionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match update_question_record(storage.as_ref(), id, update).await {
        Ok(question) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            question,
            "Question updated successfully",
        ))),
        Err(e) => Ok(error_response("Update question", &e)),
    }
}

/// 更新问题
///
/// 类型与选项合并已有值后一起校验；改为非单选类型且未给选项时清空选项。
pub async fn update_question_record(
    storage: &dyn Storage,
    id: i64,
    mut update: UpdateQuestionRequest,
) -> Result<Question> {
    let existing = storage
        .get_question_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if let Some(text) = &update.text {
        validate_text(text)?;
        update.text = Some(text.trim().to_string());
    }

    let question_type = update.question_type.unwrap_or(existing.question_type);
    if update.options.is_none()
        && update.question_type.is_some()
        && question_type != QuestionType::MultipleChoice
    {
        update.options = Some(Vec::new());
    }
    update.options = update.options.map(normalize_options);

    let options = update.options.as_deref().unwrap_or(&existing.options);
    question_type
        .validate_options(options)
        .map_err(EvalSystemError::validation)?;

    storage
        .update_question(id, update)
        .await?
        .ok_or_else(|| not_found(id))
}

pub async fn delete_question(
    service: &CatalogService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    match service.get_storage(request).delete_question(id).await {
        Ok(true) => {
            info!("Question {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Question deleted successfully")))
        }
        Ok(false) => Ok(error_response("Delete question", &not_found(id))),
        Err(e) => Ok(error_response("Delete question", &e)),
    }
}

// 去掉首尾空白；空白选项保留，由 validate_options 拒绝
fn normalize_options(options: Vec<String>) -> Vec<String> {
    options
        .into_iter()
        .map(|option| option.trim().to_string())
        .collect()
}
