use sea_orm_migration::{prelude::*, schema::*};

static IDX_OFFICERS_NAME: &str = "idx-officers-name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Officers::Table)
                    .if_not_exists()
                    .col(pk_auto(Officers::Id))
                    .col(string(Officers::Name))
                    .col(integer(Officers::Rarity))
                    .col(integer_null(Officers::Cost))
                    .col(string_null(Officers::Faction))
                    .col(string_null(Officers::House))
                    .col(string_null(Officers::InherentSkillName))
                    .col(string_null(Officers::InherentSkillType))
                    .col(string_null(Officers::InheritableSkillName))
                    .col(text_null(Officers::Trait1))
                    .col(text_null(Officers::Trait2))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OFFICERS_NAME)
                    .table(Officers::Table)
                    .col(Officers::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OFFICERS_NAME)
                    .table(Officers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Officers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Officers {
    Table,
    Id,
    Name,
    Rarity,
    Cost,
    Faction,
    House,
    InherentSkillName,
    InherentSkillType,
    InheritableSkillName,
    Trait1,
    Trait2,
}
