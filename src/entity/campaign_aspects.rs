//! 活动-维度关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campaign_aspects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub campaign_id: i64,
    pub aspect_id: i64,
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
        belongs_to = "super::aspects::Entity",
        from = "Column::AspectId",
        to = "super::aspects::Column::Id",
        on_delete = "Cascade"
    )]
    Aspect,
}

impl Related<super::campaigns::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campaign.def()
    }
}

impl Related<super::aspects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aspect.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_configured(
        self,
        aspect: super::aspects::Model,
    ) -> crate::models::campaigns::entities::ConfiguredAspect {
        use crate::models::campaigns::entities::ConfiguredAspect;

        ConfiguredAspect {
            config_id: self.id,
            aspect_id: aspect.id,
            label: aspect.label,
            description: aspect.description,
            display_order: self.display_order,
            active: self.active,
        }
    }
}
