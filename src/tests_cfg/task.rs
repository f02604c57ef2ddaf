use crate::{SoftDeleteBehavior, SoftDeleteConfig, SoftDeleteEntity};
use sea_orm::entity::prelude::*;

/// Soft deleted through a `timestamptz` column, as generated for Postgres
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "task")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDeleteEntity for Entity {
    const SOFT_DELETE: SoftDeleteConfig = SoftDeleteConfig::new().column("deleted_at");

    fn soft_delete_now() -> DateTimeUtc {
        super::post::frozen_now()
    }
}

impl SoftDeleteBehavior for ActiveModel {}
