//! 通用问卷答卷实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "generic_evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub campaign_id: i64,
    pub student_id: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub general_comment: Option<String>,
    pub created_at: i64,
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
    #[sea_orm(has_many = "super::generic_aspect_answers::Entity")]
    AspectAnswers,
    #[sea_orm(has_many = "super::generic_question_answers::Entity")]
    QuestionAnswers,
}

impl Related<super::campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl Related<super::generic_aspect_answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AspectAnswers.def()
    }
}

impl Related<super::generic_question_answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionAnswers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_generic_evaluation(
        self,
    ) -> crate::models::generic_evaluations::entities::GenericEvaluation {
        use crate::models::generic_evaluations::entities::GenericEvaluation;

        GenericEvaluation {
            id: self.id,
            campaign_id: self.campaign_id,
            student_id: self.student_id,
            general_comment: self.general_comment,
            created_at: super::to_datetime(self.created_at),
        }
    }
}
