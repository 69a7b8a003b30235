pub use sea_orm_migration::prelude::*;

mod m20251125_000001_officers;
mod m20251125_000002_skills;
mod m20251125_000003_user_officers;
mod m20251125_000004_user_skills;
mod m20251125_000005_formations;
mod m20251125_000006_formation_slots;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251125_000001_officers::Migration),
            Box::new(m20251125_000002_skills::Migration),
            Box::new(m20251125_000003_user_officers::Migration),
            Box::new(m20251125_000004_user_skills::Migration),
            Box::new(m20251125_000005_formations::Migration),
            Box::new(m20251125_000006_formation_slots::Migration),
        ]
    }
}
