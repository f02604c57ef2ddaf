use crate::{
    SoftDeleteBehavior, SoftDeleteConfig, SoftDeleteEntity, SoftDeleteErr, SoftDeleteProceed,
    SoftDeletionBlocker,
};
use sea_orm::{ConnectionTrait, DbErr, Set, Statement, entity::prelude::*};

/// Soft deleted through `deleted_at`. The hooks react to markers in the title:
///
/// - `[pinned]` is a deletion blocker, removable by `remove_soft_deletion_blockers`
/// - `[locked]` makes `before_soft_delete` return `false`
/// - `[held]` makes `around_soft_delete` return without proceeding
/// - `[decoy]` makes `around_soft_delete` proceed with a clone of the record
/// - `[audited]` makes `around_soft_delete` write to `audit_log` before and after proceeding
/// - `[unconfirmed]` makes `around_soft_delete` fail after proceeding
/// - `[notify-fail]` makes `after_soft_delete` fail
///
/// Rows are always soft deleted at [`frozen_now`].
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDeleteEntity for Entity {
    const SOFT_DELETE: SoftDeleteConfig = SoftDeleteConfig::new().column("deleted_at");

    fn soft_delete_now() -> DateTimeUtc {
        frozen_now()
    }
}

/// The clock of this entity never moves
pub fn frozen_now() -> DateTimeUtc {
    chrono::DateTime::from_timestamp(1_714_564_800, 0).unwrap_or_default()
}

impl ActiveModel {
    fn title_has(&self, marker: &str) -> bool {
        self.title.try_as_ref().is_some_and(|t| t.contains(marker))
    }
}

async fn audit<C>(db: &C, message: String) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        r#"INSERT INTO "audit_log" ("message") VALUES ($1)"#,
        [message.into()],
    ))
    .await?;
    Ok(())
}

#[async_trait::async_trait]
impl SoftDeleteBehavior for ActiveModel {
    async fn soft_deletion_blockers<C>(&self, _db: &C) -> Result<Vec<SoftDeletionBlocker>, DbErr>
    where
        C: ConnectionTrait,
    {
        if self.title_has("[pinned]") {
            Ok(vec!["post is pinned".into()])
        } else {
            Ok(Vec::new())
        }
    }

    async fn before_soft_delete<C>(&mut self, _db: &C) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(!self.title_has("[locked]"))
    }

    async fn around_soft_delete<C>(
        &mut self,
        db: &C,
        proceed: SoftDeleteProceed<'_, Self, C>,
    ) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        if self.title_has("[held]") {
            return Ok(());
        }
        if self.title_has("[decoy]") {
            let mut decoy = self.clone();
            proceed.run(&mut decoy).await?;
            return Ok(());
        }

        let audited = self.title_has("[audited]");
        if audited {
            audit(db, "soft deleting".to_owned()).await?;
        }
        let model = proceed.run(self).await?;
        if audited {
            audit(db, format!("soft deleted post {}", model.id)).await?;
        }

        if model.title.contains("[unconfirmed]") {
            return Err(DbErr::Custom(format!(
                "[around_soft_delete] Post {} was not confirmed",
                model.id
            )));
        }
        Ok(())
    }

    async fn after_soft_delete<C>(&self, model: &Model, _db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        if model.title.contains("[notify-fail]") {
            Err(DbErr::Custom(format!(
                "[after_soft_delete] Cannot notify about post {}",
                model.id
            )))
        } else {
            Ok(())
        }
    }

    async fn remove_soft_deletion_blockers<C>(&mut self, _db: &C) -> Result<(), SoftDeleteErr>
    where
        C: ConnectionTrait,
    {
        if let Some(title) = self.title.try_as_ref() {
            let unpinned = title.replace("[pinned]", "").trim().to_owned();
            self.title = Set(unpinned);
        }
        Ok(())
    }
}
