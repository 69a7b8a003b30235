use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251125_000005_formations::Formations;

static IDX_FORMATION_SLOTS_FORMATION_ID: &str = "idx-formation_slots-formation_id";
static FK_FORMATION_SLOTS_FORMATION_ID: &str = "fk-formation_slots-formation_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormationSlots::Table)
                    .if_not_exists()
                    .col(pk_auto(FormationSlots::Id))
                    .col(integer(FormationSlots::FormationId))
                    .col(string_len(FormationSlots::Position, 8))
                    .col(integer(FormationSlots::OfficerId))
                    .col(integer_null(FormationSlots::InheritSkill1Id))
                    .col(integer_null(FormationSlots::InheritSkill2Id))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FORMATION_SLOTS_FORMATION_ID)
                    .table(FormationSlots::Table)
                    .col(FormationSlots::FormationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FORMATION_SLOTS_FORMATION_ID)
                    .from_tbl(FormationSlots::Table)
                    .from_col(FormationSlots::FormationId)
                    .to_tbl(Formations::Table)
                    .to_col(Formations::Id)
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
                    .name(FK_FORMATION_SLOTS_FORMATION_ID)
                    .table(FormationSlots::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FORMATION_SLOTS_FORMATION_ID)
                    .table(FormationSlots::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FormationSlots::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FormationSlots {
    Table,
    Id,
    FormationId,
    Position,
    OfficerId,
    #[sea_orm(iden = "inherit_skill1_id")]
    InheritSkill1Id,
    #[sea_orm(iden = "inherit_skill2_id")]
    InheritSkill2Id,
}
