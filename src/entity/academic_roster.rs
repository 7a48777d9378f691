//! 教务花名册实体（只读）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_roster")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: String,
    pub course_code: Option<String>,
    pub course_name: Option<String>,
    pub teacher_id: String,
    pub teacher_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_roster_entry(self) -> crate::models::roster::entities::RosterEntry {
        use crate::models::roster::entities::RosterEntry;

        RosterEntry {
            student_id: self.student_id,
            course_code: self.course_code,
            course_name: self.course_name,
            teacher_id: self.teacher_id,
            teacher_name: self.teacher_name,
        }
    }
}
