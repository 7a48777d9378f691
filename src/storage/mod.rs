use std::sync::Arc;

use crate::models::{
    aspects::{
        entities::Aspect,
        requests::{CreateAspectRequest, UpdateAspectRequest},
    },
    campaigns::{
        entities::{Campaign, ConfiguredAspect, ConfiguredQuestion, ConfiguredValuation},
        requests::{CampaignItemsRequest, CreateCampaignRequest, UpdateCampaignRequest},
    },
    evaluations::{
        entities::{Evaluation, EvaluationDetail, NewEvaluation},
        requests::SubmitEvaluationRequest,
    },
    generic_evaluations::{
        entities::GenericEvaluation, requests::SubmitGenericEvaluationRequest,
    },
    questions::{
        entities::Question,
        requests::{CreateQuestionRequest, UpdateQuestionRequest},
    },
    results::entities::ScoredDetail,
    roster::entities::RosterEntry,
    valuations::{
        entities::ValuationScaleEntry,
        requests::{CreateValuationRequest, UpdateValuationRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

pub use sea_orm_storage::{SeaOrmRosterSource, SeaOrmStorage};

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 评价活动管理方法
    // 创建活动，active 由服务层确定
    async fn create_campaign(&self, req: CreateCampaignRequest, active: bool) -> Result<Campaign>;
    // 通过ID获取活动
    async fn get_campaign_by_id(&self, campaign_id: i64) -> Result<Option<Campaign>>;
    // 列出活动，按开始日期倒序
    async fn list_campaigns(&self) -> Result<Vec<Campaign>>;
    // 更新活动
    async fn update_campaign(
        &self,
        campaign_id: i64,
        update: UpdateCampaignRequest,
    ) -> Result<Option<Campaign>>;
    // 删除活动（级联删除配置与评价）
    async fn delete_campaign(&self, campaign_id: i64) -> Result<bool>;

    /// 活动条目配置方法
    // 整体替换活动的维度、评分等级、问题配置
    async fn set_campaign_items(&self, campaign_id: i64, req: CampaignItemsRequest)
    -> Result<()>;
    // 列出活动已配置的维度，按 display_order 排序
    async fn list_campaign_aspects(
        &self,
        campaign_id: i64,
        active_only: bool,
    ) -> Result<Vec<ConfiguredAspect>>;
    async fn list_campaign_valuations(
        &self,
        campaign_id: i64,
        active_only: bool,
    ) -> Result<Vec<ConfiguredValuation>>;
    async fn list_campaign_questions(
        &self,
        campaign_id: i64,
        active_only: bool,
    ) -> Result<Vec<ConfiguredQuestion>>;

    /// 评价维度方法
    async fn create_aspect(&self, req: CreateAspectRequest) -> Result<Aspect>;
    async fn get_aspect_by_id(&self, aspect_id: i64) -> Result<Option<Aspect>>;
    async fn list_aspects(&self) -> Result<Vec<Aspect>>;
    async fn update_aspect(
        &self,
        aspect_id: i64,
        update: UpdateAspectRequest,
    ) -> Result<Option<Aspect>>;
    async fn delete_aspect(&self, aspect_id: i64) -> Result<bool>;

    /// 评分等级方法
    async fn create_valuation(&self, req: CreateValuationRequest) -> Result<ValuationScaleEntry>;
    async fn get_valuation_by_id(&self, valuation_id: i64)
    -> Result<Option<ValuationScaleEntry>>;
    async fn list_valuations(&self) -> Result<Vec<ValuationScaleEntry>>;
    async fn update_valuation(
        &self,
        valuation_id: i64,
        update: UpdateValuationRequest,
    ) -> Result<Option<ValuationScaleEntry>>;
    async fn delete_valuation(&self, valuation_id: i64) -> Result<bool>;
    async fn count_valuations(&self) -> Result<u64>;

    /// 开放问题方法
    async fn create_question(&self, req: CreateQuestionRequest) -> Result<Question>;
    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<Question>>;
    async fn list_questions(&self) -> Result<Vec<Question>>;
    // 调用方需保证类型与选项已校验
    async fn update_question(
        &self,
        question_id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>>;
    async fn delete_question(&self, question_id: i64) -> Result<bool>;

    /// 教师评价方法
    // 在同一事务中补齐缺失的评价，只返回本次新建的记录
    async fn create_missing_evaluations(
        &self,
        campaign_id: i64,
        student_id: &str,
        pending: Vec<NewEvaluation>,
    ) -> Result<Vec<Evaluation>>;
    async fn get_evaluation_by_id(&self, evaluation_id: i64) -> Result<Option<Evaluation>>;
    // 列出学生的评价，可按活动过滤
    async fn list_student_evaluations(
        &self,
        student_id: &str,
        campaign_id: Option<i64>,
    ) -> Result<Vec<Evaluation>>;
    async fn list_campaign_evaluations(&self, campaign_id: i64) -> Result<Vec<Evaluation>>;
    async fn list_evaluation_details(&self, evaluation_id: i64) -> Result<Vec<EvaluationDetail>>;
    // 写入明细并标记提交，已提交时返回 AlreadySubmitted
    async fn submit_evaluation(&self, req: SubmitEvaluationRequest) -> Result<Evaluation>;
    async fn delete_evaluation(&self, evaluation_id: i64) -> Result<bool>;

    /// 通用问卷方法
    async fn find_generic_evaluation(
        &self,
        campaign_id: i64,
        student_id: &str,
    ) -> Result<Option<GenericEvaluation>>;
    // 写入答卷及全部回答，(活动, 学生) 重复时返回 AlreadySubmitted
    async fn create_generic_evaluation(
        &self,
        req: SubmitGenericEvaluationRequest,
    ) -> Result<GenericEvaluation>;
    async fn count_generic_evaluations(&self, campaign_id: i64) -> Result<i64>;

    /// 统计方法
    // 教师在活动中已提交评价的全部维度评分
    async fn list_teacher_scored_details(
        &self,
        campaign_id: i64,
        teacher_id: &str,
    ) -> Result<Vec<ScoredDetail>>;
}

/// 教务花名册数据源（只读）
#[async_trait::async_trait]
pub trait RosterSource: Send + Sync {
    // 学生当前所修课程及授课教师
    async fn list_student_roster(&self, student_id: &str) -> Result<Vec<RosterEntry>>;
}

pub async fn create_storage() -> Result<(Arc<dyn Storage>, Arc<dyn RosterSource>)> {
    let storage = SeaOrmStorage::new_async().await?;
    let roster = SeaOrmRosterSource::new_async(&storage).await?;
    Ok((Arc::new(storage), Arc::new(roster)))
}
