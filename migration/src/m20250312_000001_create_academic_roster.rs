use sea_orm_migration::prelude::*;

/// 教务花名册视图
///
/// 生产环境中花名册来自教务系统的独立数据库（`database.academic_url`），
/// 单库部署和测试时使用本表。
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AcademicRoster::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AcademicRoster::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AcademicRoster::StudentId).string().not_null())
                    .col(ColumnDef::new(AcademicRoster::CourseCode).string().null())
                    .col(ColumnDef::new(AcademicRoster::CourseName).string().null())
                    .col(ColumnDef::new(AcademicRoster::TeacherId).string().not_null())
                    .col(ColumnDef::new(AcademicRoster::TeacherName).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_academic_roster_student_id")
                    .table(AcademicRoster::Table)
                    .col(AcademicRoster::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AcademicRoster::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum AcademicRoster {
    #[sea_orm(iden = "academic_roster")]
    Table,
    Id,
    StudentId,
    CourseCode,
    CourseName,
    TeacherId,
    TeacherName,
}
