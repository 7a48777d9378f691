//! 评价明细实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluation_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub evaluation_id: i64,
    pub aspect_id: i64,
    pub valuation_id: i64,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::evaluations::Entity",
        from = "Column::EvaluationId",
        to = "super::evaluations::Column::Id",
        on_delete = "Cascade"
    )]
    Evaluation,
    #[sea_orm(
        belongs_to = "super::aspects::Entity",
        from = "Column::AspectId",
        to = "super::aspects::Column::Id",
        on_delete = "Cascade"
    )]
    Aspect,
    #[sea_orm(
        belongs_to = "super::valuation_scales::Entity",
        from = "Column::ValuationId",
        to = "super::valuation_scales::Column::Id",
        on_delete = "Cascade"
    )]
    Valuation,
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluation.def()
    }
}

impl Related<super::aspects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aspect.def()
    }
}

impl Related<super::valuation_scales::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Valuation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_detail(self) -> crate::models::evaluations::entities::EvaluationDetail {
        use crate::models::evaluations::entities::EvaluationDetail;

        EvaluationDetail {
            id: self.id,
            evaluation_id: self.evaluation_id,
            aspect_id: self.aspect_id,
            valuation_id: self.valuation_id,
            comment: self.comment,
            created_at: super::to_datetime(self.created_at),
        }
    }
}
