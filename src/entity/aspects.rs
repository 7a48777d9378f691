//! 评价维度实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "aspects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub label: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campaign_aspects::Entity")]
    CampaignAspects,
}

impl Related<super::campaign_aspects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignAspects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_aspect(self) -> crate::models::aspects::entities::Aspect {
        use crate::models::aspects::entities::Aspect;

        Aspect {
            id: self.id,
            label: self.label,
            description: self.description,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
