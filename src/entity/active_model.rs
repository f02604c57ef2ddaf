use super::base_entity::find_soft_delete_column;
use super::behavior::{ModelOf, SoftDeleteProceed};
use super::timestamp::{is_timestamp_set, stamp};
use crate::{HookFailure, SoftDeleteBehavior, SoftDeleteEntity, SoftDeleteErr, SoftDeleteHook};
use async_trait::async_trait;
use futures_util::future::BoxFuture;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, Iterable, ModelTrait, PrimaryKeyToColumn,
};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, instrument, trace};

/// Soft delete operations on an `ActiveModel`, available to every
/// [`SoftDeleteBehavior`] of a [`SoftDeleteEntity`]
#[async_trait]
pub trait SoftDeleteActiveModelTrait: SoftDeleteBehavior {
    /// Soft delete this row: check blockers, run the hooks, then fill the soft
    /// delete column with the current time and save the row. A record whose
    /// primary key is not set is inserted.
    ///
    /// On success `self` holds the updated row and the updated `Model` is
    /// returned. If a blocker or hook refuses, this returns
    /// [`SoftDeleteErr::HookFailed`] and nothing has been written.
    ///
    /// Calling it on a row that is already soft deleted runs every hook again
    /// and overwrites the timestamp.
    async fn soft_delete<'a, C>(&'a mut self, db: &'a C) -> Result<ModelOf<Self>, SoftDeleteErr>
    where
        C: ConnectionTrait,
        Self::Entity: SoftDeleteEntity,
        ModelOf<Self>: IntoActiveModel<Self>,
    {
        trace!("soft_deletion_blockers");
        let blockers = self.soft_deletion_blockers(db).await?;
        if !blockers.is_empty() {
            debug!(blockers = blockers.len(), "Soft delete blocked");
            return Err(SoftDeleteErr::HookFailed {
                hook: SoftDeleteHook::BeforeSoftDelete,
                failure: HookFailure::Blocked(blockers),
            });
        }

        trace!("before_soft_delete");
        if !self.before_soft_delete(db).await? {
            debug!("Soft delete refused by before_soft_delete");
            return Err(SoftDeleteErr::HookFailed {
                hook: SoftDeleteHook::BeforeSoftDelete,
                failure: HookFailure::Refused,
            });
        }

        trace!("around_soft_delete");
        let persisted = Mutex::new(None);
        self.around_soft_delete(
            db,
            SoftDeleteProceed::new(db, mark_soft_deleted_boxed::<Self, C>, &persisted),
        )
        .await?;
        let model = match persisted.into_inner().unwrap_or_else(PoisonError::into_inner) {
            Some(model) if holds_persisted_row(self, &model) => model,
            _ => {
                debug!("Soft delete not proceeded by around_soft_delete");
                return Err(SoftDeleteErr::HookFailed {
                    hook: SoftDeleteHook::AroundSoftDelete,
                    failure: HookFailure::NotProceeded,
                });
            }
        };

        trace!("after_soft_delete");
        self.after_soft_delete(&model, db).await?;

        Ok(model)
    }

    /// Clear the soft delete column and save the row. No hooks are run.
    async fn restore<'a, C>(&'a mut self, db: &'a C) -> Result<ModelOf<Self>, DbErr>
    where
        C: ConnectionTrait,
        Self::Entity: SoftDeleteEntity,
        ModelOf<Self>: IntoActiveModel<Self>,
    {
        persist_stamp(self, None, db).await
    }

    /// Whether the soft delete column of this `ActiveModel` holds a timestamp
    fn is_soft_deleted(&self) -> bool
    where
        Self::Entity: SoftDeleteEntity,
    {
        match find_soft_delete_column::<Self::Entity>().map(|col| self.get(col)) {
            Some(ActiveValue::Set(v) | ActiveValue::Unchanged(v)) => is_timestamp_set(&v),
            _ => false,
        }
    }
}

impl<A> SoftDeleteActiveModelTrait for A where A: SoftDeleteBehavior {}

fn mark_soft_deleted_boxed<'r, A, C>(
    record: &'r mut A,
    db: &'r C,
) -> BoxFuture<'r, Result<ModelOf<A>, DbErr>>
where
    A: ActiveModelBehavior + Send,
    A::Entity: SoftDeleteEntity,
    ModelOf<A>: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    Box::pin(mark_soft_deleted(record, db))
}

#[instrument(level = "trace", skip_all)]
async fn mark_soft_deleted<A, C>(record: &mut A, db: &C) -> Result<ModelOf<A>, DbErr>
where
    A: ActiveModelBehavior + Send,
    A::Entity: SoftDeleteEntity,
    ModelOf<A>: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let now = <A::Entity as SoftDeleteEntity>::soft_delete_now();
    persist_stamp(record, Some(now), db).await
}

async fn persist_stamp<A, C>(
    record: &mut A,
    at: Option<chrono::DateTime<chrono::Utc>>,
    db: &C,
) -> Result<ModelOf<A>, DbErr>
where
    A: ActiveModelBehavior + Send,
    A::Entity: SoftDeleteEntity,
    ModelOf<A>: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let mut stamped = record.clone();
    stamp(&mut stamped, at)?;
    let model = if is_persisted(&stamped) {
        stamped.update(db).await?
    } else {
        stamped.insert(db).await?
    };
    *record = model.clone().into_active_model();
    Ok(model)
}

/// A record with its whole primary key set is updated; any other record is inserted
fn is_persisted<A>(record: &A) -> bool
where
    A: ActiveModelTrait,
{
    <A::Entity as EntityTrait>::PrimaryKey::iter().all(|key| !record.is_not_set(key.into_column()))
}

/// The around hook proceeded with this very record, not a copy of it
fn holds_persisted_row<A>(record: &A, model: &ModelOf<A>) -> bool
where
    A: ActiveModelTrait,
    A::Entity: SoftDeleteEntity,
{
    <A::Entity as EntityTrait>::PrimaryKey::iter()
        .map(|key| key.into_column())
        .chain(find_soft_delete_column::<A::Entity>())
        .all(|col| record.get(col).into_value() == Some(model.get(col)))
}
