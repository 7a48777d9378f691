//! 活动-问题关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campaign_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub campaign_id: i64,
    pub question_id: i64,
    pub display_order: i32,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campaigns::Entity",
        from = "Column::CampaignId",
        to = "super::campaigns::Column::Id",
        on_delete = "Cascade"
    )]
    Campaign,
    #[sea_orm(
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id",
        on_delete = "Cascade"
    )]
    Question,
}

impl Related<super::campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_configured(
        self,
        question: super::questions::Model,
    ) -> crate::models::campaigns::entities::ConfiguredQuestion {
        use crate::models::campaigns::entities::ConfiguredQuestion;

        ConfiguredQuestion {
            config_id: self.id,
            question_id: question.id,
            question_type: question.parsed_type(),
            options: question.parsed_options(),
            text: question.text,
            display_order: self.display_order,
            active: self.active,
        }
    }
}
