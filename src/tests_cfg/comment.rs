use crate::{SoftDeleteBehavior, SoftDeleteConfig, SoftDeleteEntity};
use sea_orm::entity::prelude::*;

/// Configured with a column the table does not have
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub text: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDeleteEntity for Entity {
    const SOFT_DELETE: SoftDeleteConfig = SoftDeleteConfig::new().column("archived_at");
}

impl SoftDeleteBehavior for ActiveModel {}
