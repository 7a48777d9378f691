//! 通用问卷开放问题回答实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "generic_question_answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub generic_evaluation_id: i64,
    pub question_id: i64,
    #[sea_orm(column_type = "Text")]
    pub answer: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::generic_evaluations::Entity",
        from = "Column::GenericEvaluationId",
        to = "super::generic_evaluations::Column::Id",
        on_delete = "Cascade"
    )]
    GenericEvaluation,
    #[sea_orm(
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id",
        on_delete = "Cascade"
    )]
    Question,
}

impl Related<super::generic_evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GenericEvaluation.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
