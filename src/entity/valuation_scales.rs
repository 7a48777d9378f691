//! 评分等级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "valuation_scales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub label: String,
    pub weight: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign_valuations::Entity")]
    CampaignValuations,
}

impl Related<super::campaign_valuations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignValuations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_valuation(self) -> crate::models::valuations::entities::ValuationScaleEntry {
        use crate::models::valuations::entities::ValuationScaleEntry;

        ValuationScaleEntry {
            id: self.id,
            label: self.label,
            weight: self.weight,
            description: self.description,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
