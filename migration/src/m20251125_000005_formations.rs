use sea_orm_migration::{prelude::*, schema::*};

static IDX_FORMATIONS_NATURAL_KEY: &str = "idx-formations-owner_key-advisor_key-label";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Formations::Table)
                    .if_not_exists()
                    .col(pk_auto(Formations::Id))
                    .col(string(Formations::OwnerKey))
                    .col(string(Formations::AdvisorKey))
                    .col(string(Formations::Label))
                    .col(text_null(Formations::RequestComment))
                    .col(text_null(Formations::AnswerComment))
                    .col(timestamp(Formations::CreatedAt))
                    .col(timestamp(Formations::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FORMATIONS_NATURAL_KEY)
                    .table(Formations::Table)
                    .col(Formations::OwnerKey)
                    .col(Formations::AdvisorKey)
                    .col(Formations::Label)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FORMATIONS_NATURAL_KEY)
                    .table(Formations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Formations::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Formations {
    Table,
    Id,
    OwnerKey,
    AdvisorKey,
    Label,
    RequestComment,
    AnswerComment,
    CreatedAt,
    UpdatedAt,
}
