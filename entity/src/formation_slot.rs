use sea_orm::entity::prelude::*;

/// A single position of a formation.
///
/// `position` holds one of `leader`, `sub1` or `sub2`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "formation_slots")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub formation_id: i32,
    pub position: String,
    pub officer_id: i32,
    pub inherit_skill1_id: Option<i32>,
    pub inherit_skill2_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::formation::Entity",
        from = "Column::FormationId",
        to = "super::formation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Formation,
}

impl Related<super::formation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Formation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
