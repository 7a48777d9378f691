//! 通用问卷维度评分实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "generic_aspect_answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub generic_evaluation_id: i64,
    pub aspect_id: i64,
    pub valuation_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
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
}

impl Related<super::generic_evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GenericEvaluation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
