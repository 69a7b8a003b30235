use sea_orm::entity::prelude::*;

/// Formation header, one row per (owner, advisor, label).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "formations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_key: String,
    pub advisor_key: String,
    pub label: String,
    pub request_comment: Option<String>,
    pub answer_comment: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::formation_slot::Entity")]
    FormationSlot,
}

impl Related<super::formation_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormationSlot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
