use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251125_000002_skills::Skills;

static IDX_USER_SKILLS_SKILL_ID: &str = "idx-user_skills-skill_id";
static FK_USER_SKILLS_SKILL_ID: &str = "fk-user_skills-skill_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserSkills::Table)
                    .if_not_exists()
                    .col(string(UserSkills::UserKey))
                    .col(integer(UserSkills::SkillId))
                    .col(integer(UserSkills::Count).default(0))
                    .primary_key(
                        Index::create()
                            .col(UserSkills::UserKey)
                            .col(UserSkills::SkillId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_SKILLS_SKILL_ID)
                    .table(UserSkills::Table)
                    .col(UserSkills::SkillId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_SKILLS_SKILL_ID)
                    .from_tbl(UserSkills::Table)
                    .from_col(UserSkills::SkillId)
                    .to_tbl(Skills::Table)
                    .to_col(Skills::Id)
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
                    .name(FK_USER_SKILLS_SKILL_ID)
                    .table(UserSkills::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_SKILLS_SKILL_ID)
                    .table(UserSkills::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserSkills::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserSkills {
    Table,
    UserKey,
    SkillId,
    Count,
}
