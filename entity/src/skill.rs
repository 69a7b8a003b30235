use sea_orm::entity::prelude::*;

/// Skill reference data.
///
/// `owner_name` is set for exclusive skills bound to a single officer; those never appear
/// in ownership or inheritance pools.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    pub trigger_rate: Option<f64>,
    pub owner_name: Option<String>,
    pub description: Option<String>,
    pub inherit1_name: Option<String>,
    pub inherit2_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_skill::Entity")]
    UserSkill,
}

impl Related<super::user_skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSkill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
