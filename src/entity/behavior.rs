use crate::{SoftDeleteErr, SoftDeletionBlocker};
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::fmt;
use std::sync::{Mutex, PoisonError};

pub(crate) type ModelOf<A> = <<A as ActiveModelTrait>::Entity as EntityTrait>::Model;

pub(crate) type MarkFn<A, C> =
    for<'r> fn(&'r mut A, &'r C) -> BoxFuture<'r, Result<ModelOf<A>, DbErr>>;

/// Hooks of the soft delete pipeline, implemented on an `ActiveModel`.
///
/// Every hook has a default, so an empty `impl` soft deletes unconditionally.
/// Like [`ActiveModelBehavior`], a hook reports an unexpected failure with
/// `Err(DbErr)`; the error is returned from
/// [`soft_delete`](crate::SoftDeleteActiveModelTrait::soft_delete) as
/// [`SoftDeleteErr::Db`].
///
/// ```ignore
/// #[async_trait::async_trait]
/// impl SoftDeleteBehavior for ActiveModel {
///     async fn before_soft_delete<C>(&mut self, _db: &C) -> Result<bool, DbErr>
///     where
///         C: ConnectionTrait,
///     {
///         Ok(!self.title.as_ref().is_empty())
///     }
///
///     async fn around_soft_delete<C>(
///         &mut self,
///         db: &C,
///         proceed: SoftDeleteProceed<'_, Self, C>,
///     ) -> Result<(), DbErr>
///     where
///         C: ConnectionTrait,
///     {
///         audit::log(db, "soft deleting").await?;
///         proceed.run(self).await?;
///         audit::log(db, "soft deleted").await
///     }
/// }
/// ```
#[async_trait]
#[allow(unused_variables)]
pub trait SoftDeleteBehavior: ActiveModelBehavior + Send + Sync {
    /// Reasons why this row cannot be soft deleted right now.
    /// Any blocker stops the soft delete before `before_soft_delete` is called.
    async fn soft_deletion_blockers<C>(&self, db: &C) -> Result<Vec<SoftDeletionBlocker>, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(Vec::new())
    }

    /// Will be called before soft deleting. Returning `false` stops the soft delete.
    async fn before_soft_delete<C>(&mut self, db: &C) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(true)
    }

    /// Wraps the soft delete itself, which only happens if `proceed` is run.
    async fn around_soft_delete<C>(
        &mut self,
        db: &C,
        proceed: SoftDeleteProceed<'_, Self, C>,
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        proceed.run(self).await.map(|_| ())
    }

    /// Will be called after the row has been soft deleted; it cannot be undone from here.
    async fn after_soft_delete<C>(&self, model: &ModelOf<Self>, db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(())
    }

    /// Clear whatever [`soft_deletion_blockers`](Self::soft_deletion_blockers) reports.
    ///
    /// Never called by the pipeline. Entities that support it override this;
    /// otherwise it fails with [`SoftDeleteErr::NotImplemented`].
    async fn remove_soft_deletion_blockers<C>(&mut self, db: &C) -> Result<(), SoftDeleteErr>
    where
        C: ConnectionTrait,
    {
        Err(SoftDeleteErr::NotImplemented("remove_soft_deletion_blockers"))
    }
}

/// The continuation handed to
/// [`around_soft_delete`](SoftDeleteBehavior::around_soft_delete).
///
/// Running it writes the soft delete timestamp and saves the row. It must be run
/// on the record the hook received; an around hook that drops it, or runs it on
/// another record, makes the soft delete fail with
/// [`HookFailure::NotProceeded`](crate::HookFailure::NotProceeded).
pub struct SoftDeleteProceed<'p, A, C>
where
    A: ActiveModelTrait,
{
    db: &'p C,
    mark: MarkFn<A, C>,
    persisted: &'p Mutex<Option<ModelOf<A>>>,
}

impl<'p, A, C> SoftDeleteProceed<'p, A, C>
where
    A: ActiveModelTrait,
{
    pub(crate) fn new(
        db: &'p C,
        mark: MarkFn<A, C>,
        persisted: &'p Mutex<Option<ModelOf<A>>>,
    ) -> Self {
        Self {
            db,
            mark,
            persisted,
        }
    }

    /// Soft delete `record` and return the updated row.
    ///
    /// `record` is left untouched if the update fails.
    pub async fn run(self, record: &mut A) -> Result<ModelOf<A>, DbErr> {
        let model = (self.mark)(record, self.db).await?;
        *self
            .persisted
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(model.clone());
        Ok(model)
    }
}

impl<A, C> fmt::Debug for SoftDeleteProceed<'_, A, C>
where
    A: ActiveModelTrait,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoftDeleteProceed").finish_non_exhaustive()
    }
}
