use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251125_000001_officers::Officers;

static IDX_USER_OFFICERS_OFFICER_ID: &str = "idx-user_officers-officer_id";
static FK_USER_OFFICERS_OFFICER_ID: &str = "fk-user_officers-officer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserOfficers::Table)
                    .if_not_exists()
                    .col(string(UserOfficers::UserKey))
                    .col(integer(UserOfficers::OfficerId))
                    .col(integer(UserOfficers::Count).default(0))
                    .primary_key(
                        Index::create()
                            .col(UserOfficers::UserKey)
                            .col(UserOfficers::OfficerId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_OFFICERS_OFFICER_ID)
                    .table(UserOfficers::Table)
                    .col(UserOfficers::OfficerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_OFFICERS_OFFICER_ID)
                    .from_tbl(UserOfficers::Table)
                    .from_col(UserOfficers::OfficerId)
                    .to_tbl(Officers::Table)
                    .to_col(Officers::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_OFFICERS_OFFICER_ID)
                    .table(UserOfficers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_OFFICERS_OFFICER_ID)
                    .table(UserOfficers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserOfficers::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserOfficers {
    Table,
    UserKey,
    OfficerId,
    Count,
}
