use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建评价活动表
        manager
            .create_table(
                Table::create()
                    .table(Campaigns::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Campaigns::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Campaigns::Name).string().not_null())
                    .col(ColumnDef::new(Campaigns::Description).text().null())
                    .col(ColumnDef::new(Campaigns::StartDate).date().not_null())
                    .col(ColumnDef::new(Campaigns::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Campaigns::Active)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Campaigns::TeacherEvaluation)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Campaigns::FormUrl).string().null())
                    .col(ColumnDef::new(Campaigns::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Campaigns::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建评价维度表
        manager
            .create_table(
                Table::create()
                    .table(Aspects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Aspects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Aspects::Label).string().not_null())
                    .col(ColumnDef::new(Aspects::Description).text().null())
                    .col(ColumnDef::new(Aspects::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Aspects::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建评分等级表
        manager
            .create_table(
                Table::create()
                    .table(ValuationScales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ValuationScales::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ValuationScales::Label).string().not_null())
                    .col(ColumnDef::new(ValuationScales::Weight).double().not_null())
                    .col(ColumnDef::new(ValuationScales::Description).text().null())
                    .col(
                        ColumnDef::new(ValuationScales::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ValuationScales::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建开放问题表
        manager
            .create_table(
                Table::create()
                    .table(Questions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Questions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Questions::Text).text().not_null())
                    .col(ColumnDef::new(Questions::QuestionType).string().not_null())
                    .col(ColumnDef::new(Questions::Options).text().null())
                    .col(ColumnDef::new(Questions::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Questions::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 活动-维度关联表
        manager
            .create_table(
                Table::create()
                    .table(CampaignAspects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CampaignAspects::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CampaignAspects::CampaignId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignAspects::AspectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignAspects::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CampaignAspects::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CampaignAspects::Table, CampaignAspects::CampaignId)
                            .to(Campaigns::Table, Campaigns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CampaignAspects::Table, CampaignAspects::AspectId)
                            .to(Aspects::Table, Aspects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 活动-评分等级关联表
        manager
            .create_table(
                Table::create()
                    .table(CampaignValuations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CampaignValuations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CampaignValuations::CampaignId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignValuations::ValuationId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignValuations::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CampaignValuations::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CampaignValuations::Table, CampaignValuations::CampaignId)
                            .to(Campaigns::Table, Campaigns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CampaignValuations::Table, CampaignValuations::ValuationId)
                            .to(ValuationScales::Table, ValuationScales::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 活动-问题关联表
        manager
            .create_table(
                Table::create()
                    .table(CampaignQuestions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CampaignQuestions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CampaignQuestions::CampaignId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignQuestions::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CampaignQuestions::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CampaignQuestions::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CampaignQuestions::Table, CampaignQuestions::CampaignId)
                            .to(Campaigns::Table, Campaigns::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CampaignQuestions::Table, CampaignQuestions::QuestionId)
                            .to(Questions::Table, Questions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引：同一活动中每个条目只能配置一次
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_campaign_aspects_campaign_aspect")
                    .table(CampaignAspects::Table)
                    .col(CampaignAspects::CampaignId)
                    .col(CampaignAspects::AspectId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_campaign_valuations_campaign_valuation")
                    .table(CampaignValuations::Table)
                    .col(CampaignValuations::CampaignId)
                    .col(CampaignValuations::ValuationId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_campaign_questions_campaign_question")
                    .table(CampaignQuestions::Table)
                    .col(CampaignQuestions::CampaignId)
                    .col(CampaignQuestions::QuestionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(CampaignQuestions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CampaignValuations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CampaignAspects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Questions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ValuationScales::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Aspects::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Campaigns::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Campaigns {
    #[sea_orm(iden = "campaigns")]
    Table,
    Id,
    Name,
    Description,
    StartDate,
    EndDate,
    Active,
    TeacherEvaluation,
    FormUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Aspects {
    #[sea_orm(iden = "aspects")]
    Table,
    Id,
    Label,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum ValuationScales {
    #[sea_orm(iden = "valuation_scales")]
    Table,
    Id,
    Label,
    Weight,
    Description,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Questions {
    #[sea_orm(iden = "questions")]
    Table,
    Id,
    Text,
    QuestionType,
    Options,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CampaignAspects {
    #[sea_orm(iden = "campaign_aspects")]
    Table,
    Id,
    CampaignId,
    AspectId,
    DisplayOrder,
    Active,
}

#[derive(DeriveIden)]
enum CampaignValuations {
    #[sea_orm(iden = "campaign_valuations")]
    Table,
    Id,
    CampaignId,
    ValuationId,
    DisplayOrder,
    Active,
}

#[derive(DeriveIden)]
enum CampaignQuestions {
    #[sea_orm(iden = "campaign_questions")]
    Table,
    Id,
    CampaignId,
    QuestionId,
    DisplayOrder,
    Active,
}
