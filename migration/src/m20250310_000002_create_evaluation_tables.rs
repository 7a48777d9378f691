use sea_orm_migration::prelude::*;

use crate::m20250310_000001_create_catalog_tables::{
    Aspects, Campaigns, Questions, ValuationScales,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 教师评价表：每个 (活动, 学生, 课程) 一行
        manager
            .create_table(
                Table::create()
                    .table(Evaluations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Evaluations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Evaluations::CampaignId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Evaluations::StudentId).string().not_null())
                    .col(ColumnDef::new(Evaluations::TeacherId).string().not_null())
                    .col(ColumnDef::new(Evaluations::TeacherName).string().null())
                    .col(ColumnDef::new(Evaluations::CourseCode).string().not_null())
                    .col(ColumnDef::new(Evaluations::CourseName).string().null())
                    .col(ColumnDef::new(Evaluations::GeneralComment).text().null())
                    .col(
                        ColumnDef::new(Evaluations::SubmittedAt)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Evaluations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Evaluations::Table, Evaluations::CampaignId)
                            .to(Campaigns::Table, Campaigns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 评价明细表：每个 (评价, 维度) 一行
        // 维度与评分等级被已提交的明细引用时不可删除
        manager
            .create_table(
                Table::create()
                    .table(EvaluationDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EvaluationDetails::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDetails::EvaluationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDetails::AspectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(EvaluationDetails::ValuationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(EvaluationDetails::Comment).text().null())
                    .col(
                        ColumnDef::new(EvaluationDetails::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EvaluationDetails::Table, EvaluationDetails::EvaluationId)
                            .to(Evaluations::Table, Evaluations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EvaluationDetails::Table, EvaluationDetails::AspectId)
                            .to(Aspects::Table, Aspects::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(EvaluationDetails::Table, EvaluationDetails::ValuationId)
                            .to(ValuationScales::Table, ValuationScales::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 通用问卷表：每个 (活动, 学生) 一行
        manager
            .create_table(
                Table::create()
                    .table(GenericEvaluations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GenericEvaluations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GenericEvaluations::CampaignId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenericEvaluations::StudentId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenericEvaluations::GeneralComment)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(GenericEvaluations::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GenericEvaluations::Table, GenericEvaluations::CampaignId)
                            .to(Campaigns::Table, Campaigns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GenericAspectAnswers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GenericAspectAnswers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GenericAspectAnswers::GenericEvaluationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenericAspectAnswers::AspectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenericAspectAnswers::ValuationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(GenericAspectAnswers::Comment).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                GenericAspectAnswers::Table,
                                GenericAspectAnswers::GenericEvaluationId,
                            )
                            .to(GenericEvaluations::Table, GenericEvaluations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GenericAspectAnswers::Table, GenericAspectAnswers::AspectId)
                            .to(Aspects::Table, Aspects::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                GenericAspectAnswers::Table,
                                GenericAspectAnswers::ValuationId,
                            )
                            .to(ValuationScales::Table, ValuationScales::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GenericQuestionAnswers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GenericQuestionAnswers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GenericQuestionAnswers::GenericEvaluationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenericQuestionAnswers::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenericQuestionAnswers::Answer)
                            .text()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                GenericQuestionAnswers::Table,
                                GenericQuestionAnswers::GenericEvaluationId,
                            )
                            .to(GenericEvaluations::Table, GenericEvaluations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                GenericQuestionAnswers::Table,
                                GenericQuestionAnswers::QuestionId,
                            )
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 唯一约束：并发初始化时不会产生重复评价
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_evaluations_campaign_student_course")
                    .table(Evaluations::Table)
                    .col(Evaluations::CampaignId)
                    .col(Evaluations::StudentId)
                    .col(Evaluations::CourseCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_evaluations_teacher_id")
                    .table(Evaluations::Table)
                    .col(Evaluations::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_evaluation_details_evaluation_id")
                    .table(EvaluationDetails::Table)
                    .col(EvaluationDetails::EvaluationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_generic_evaluations_campaign_student")
                    .table(GenericEvaluations::Table)
                    .col(GenericEvaluations::CampaignId)
                    .col(GenericEvaluations::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GenericQuestionAnswers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GenericAspectAnswers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GenericEvaluations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EvaluationDetails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Evaluations::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Evaluations {
    #[sea_orm(iden = "evaluations")]
    Table,
    Id,
    CampaignId,
    StudentId,
    TeacherId,
    TeacherName,
    CourseCode,
    CourseName,
    GeneralComment,
    SubmittedAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EvaluationDetails {
    #[sea_orm(iden = "evaluation_details")]
    Table,
    Id,
    EvaluationId,
    AspectId,
    ValuationId,
    Comment,
    CreatedAt,
}

#[derive(DeriveIden)]
enum GenericEvaluations {
    #[sea_orm(iden = "generic_evaluations")]
    Table,
    Id,
    CampaignId,
    StudentId,
    GeneralComment,
    CreatedAt,
}

#[derive(DeriveIden)]
enum GenericAspectAnswers {
    #[sea_orm(iden = "generic_aspect_answers")]
    Table,
    Id,
    GenericEvaluationId,
    AspectId,
    ValuationId,
    Comment,
}

#[derive(DeriveIden)]
enum GenericQuestionAnswers {
    #[sea_orm(iden = "generic_question_answers")]
    Table,
    Id,
    GenericEvaluationId,
    QuestionId,
    Answer,
}
