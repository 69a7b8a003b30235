use sea_orm_migration::{prelude::*, schema::*};

static IDX_SKILLS_OWNER_NAME: &str = "idx-skills-owner_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(pk_auto(Skills::Id))
                    .col(string(Skills::Name))
                    .col(string_null(Skills::Category))
                    .col(double_null(Skills::TriggerRate))
                    .col(string_null(Skills::OwnerName))
                    .col(text_null(Skills::Description))
                    .col(string_null(Skills::Inherit1Name))
                    .col(string_null(Skills::Inherit2Name))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SKILLS_OWNER_NAME)
                    .table(Skills::Table)
                    .col(Skills::OwnerName)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SKILLS_OWNER_NAME)
                    .table(Skills::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Skills {
    Table,
    Id,
    Name,
    Category,
    TriggerRate,
    OwnerName,
    Description,
    #[sea_orm(iden = "inherit1_name")]
    Inherit1Name,
    #[sea_orm(iden = "inherit2_name")]
    Inherit2Name,
}
