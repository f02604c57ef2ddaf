use super::base_entity::find_soft_delete_column;
use super::timestamp::is_timestamp_set;
use crate::SoftDeleteEntity;
use sea_orm::ModelTrait;

/// Soft delete state of a `Model` read from the database
pub trait SoftDeleteModelTrait: ModelTrait
where
    Self::Entity: SoftDeleteEntity,
{
    /// Whether the soft delete column holds a timestamp
    fn is_soft_deleted(&self) -> bool {
        find_soft_delete_column::<Self::Entity>()
            .is_some_and(|col| is_timestamp_set(&self.get(col)))
    }
}

impl<M> SoftDeleteModelTrait for M
where
    M: ModelTrait,
    M::Entity: SoftDeleteEntity,
{
}
