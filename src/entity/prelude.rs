//! 预导入模块，方便使用

pub use super::academic_roster::Entity as AcademicRoster;
pub use super::aspects::{ActiveModel as AspectActiveModel, Entity as Aspects, Model as AspectModel};
pub use super::campaign_aspects::{
    ActiveModel as CampaignAspectActiveModel, Entity as CampaignAspects,
};
pub use super::campaign_questions::{
    ActiveModel as CampaignQuestionActiveModel, Entity as CampaignQuestions,
};
pub use super::campaign_valuations::{
    ActiveModel as CampaignValuationActiveModel, Entity as CampaignValuations,
};
pub use super::campaigns::{
    ActiveModel as CampaignActiveModel, Entity as Campaigns, Model as CampaignModel,
};
pub use super::evaluation_details::{
    ActiveModel as EvaluationDetailActiveModel, Entity as EvaluationDetails,
};
pub use super::evaluations::{
    ActiveModel as EvaluationActiveModel, Entity as Evaluations, Model as EvaluationModel,
};
pub use super::generic_aspect_answers::{
    ActiveModel as GenericAspectAnswerActiveModel, Entity as GenericAspectAnswers,
};
pub use super::generic_evaluations::{
    ActiveModel as GenericEvaluationActiveModel, Entity as GenericEvaluations,
};
pub use super::generic_question_answers::{
    ActiveModel as GenericQuestionAnswerActiveModel, Entity as GenericQuestionAnswers,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::valuation_scales::{
    ActiveModel as ValuationActiveModel, Entity as ValuationScales, Model as ValuationModel,
};
