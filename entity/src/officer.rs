use sea_orm::entity::prelude::*;

/// Officer reference data, never edited by the application.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "officers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub rarity: i32,
    pub cost: Option<i32>,
    pub faction: Option<String>,
    pub house: Option<String>,
    pub inherent_skill_name: Option<String>,
    pub inherent_skill_type: Option<String>,
    pub inheritable_skill_name: Option<String>,
    pub trait1: Option<String>,
    pub trait2: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_officer::Entity")]
    UserOfficer,
}

impl Related<super::user_officer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserOfficer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
