//! 评价活动实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campaigns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub active: bool,
    pub teacher_evaluation: bool,
    pub form_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign_aspects::Entity")]
    CampaignAspects,
    #[sea_orm(has_many = "super::campaign_valuations::Entity")]
    CampaignValuations,
    #[sea_orm(has_many = "super::campaign_questions::Entity")]
    CampaignQuestions,
    #[sea_orm(has_many = "super::evaluations::Entity")]
    Evaluations,
    #[sea_orm(has_many = "super::generic_evaluations::Entity")]
    GenericEvaluations,
}

impl Related<super::campaign_aspects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignAspects.def()
    }
}

impl Related<super::campaign_valuations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignValuations.def()
    }
}

impl Related<super::campaign_questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignQuestions.def()
    }
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluations.def()
    }
}

impl Related<super::generic_evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GenericEvaluations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_campaign(self) -> crate::models::campaigns::entities::Campaign {
        use crate::models::campaigns::entities::Campaign;

        Campaign {
            id: self.id,
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            active: self.active,
            teacher_evaluation: self.teacher_evaluation,
            form_url: self.form_url,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
