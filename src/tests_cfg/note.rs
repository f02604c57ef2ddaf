use crate::{SoftDeleteBehavior, SoftDeleteEntity};
use sea_orm::entity::prelude::*;

/// Soft deleted through the default column, without any hook
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "note")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub body: String,
    pub soft_deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDeleteEntity for Entity {}

impl SoftDeleteBehavior for ActiveModel {}
