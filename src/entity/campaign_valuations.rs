//! 活动-评分等级关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campaign_valuations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub campaign_id: i64,
    pub valuation_id: i64,
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
        belongs_to = "super::valuation_scales::Entity",
        from = "Column::ValuationId",
        to = "super::valuation_scales::Column::Id",
        on_delete = "Cascade"
    )]
    Valuation,
}

impl Related<super::campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl Related<super::valuation_scales::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Valuation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_configured(
        self,
        valuation: super::valuation_scales::Model,
    ) -> crate::models::campaigns::entities::ConfiguredValuation {
        use crate::models::campaigns::entities::ConfiguredValuation;

        ConfiguredValuation {
            config_id: self.id,
            valuation_id: valuation.id,
            label: valuation.label,
            weight: valuation.weight,
            display_order: self.display_order,
            active: self.active,
        }
    }
}
