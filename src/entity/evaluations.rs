//! 教师评价实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub campaign_id: i64,
    pub student_id: String,
    pub teacher_id: String,
    pub teacher_name: Option<String>,
    pub course_code: String,
    pub course_name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub general_comment: Option<String>,
    pub submitted_at: Option<i64>,
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
    #[sea_orm(has_many = "super::evaluation_details::Entity")]
    Details,
}

impl Related<super::campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl Related<super::evaluation_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Details.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation(self) -> crate::models::evaluations::entities::Evaluation {
        use crate::models::evaluations::entities::Evaluation;

        Evaluation {
            id: self.id,
            campaign_id: self.campaign_id,
            student_id: self.student_id,
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
            course_code: self.course_code,
            course_name: self.course_name,
            general_comment: self.general_comment,
            submitted: self.submitted_at.is_some(),
            submitted_at: self.submitted_at.map(super::to_datetime),
            created_at: super::to_datetime(self.created_at),
        }
    }
}
