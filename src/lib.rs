#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # SeaORM Soft Delete
//!
//! Mark rows as deleted by filling a timestamp column instead of removing them.
//!
//! An entity opts in by implementing [`SoftDeleteEntity`], optionally naming the
//! column through [`SoftDeleteConfig`] (it defaults to `soft_deleted_at`). Its
//! `ActiveModel` implements [`SoftDeleteBehavior`], overriding any of the hooks
//! it cares about. [`SoftDeleteActiveModelTrait::soft_delete`] then runs the
//! pipeline:
//!
//! 1. `soft_deletion_blockers` and `before_soft_delete`, either of which can veto
//! 2. `around_soft_delete`, which must call [`SoftDeleteProceed::run`]
//! 3. the timestamp is written and the row saved
//! 4. `after_soft_delete`, which can no longer undo anything
//!
//! A veto is reported as [`SoftDeleteErr::HookFailed`] and guarantees that
//! nothing was written. Database errors surface as [`SoftDeleteErr::Db`].
//!
//! ```ignore
//! use sea_orm::entity::prelude::*;
//! use sea_orm_soft_delete::*;
//!
//! #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
//! #[sea_orm(table_name = "post")]
//! pub struct Model {
//!     #[sea_orm(primary_key)]
//!     pub id: i32,
//!     pub title: String,
//!     pub deleted_at: Option<DateTimeUtc>,
//! }
//!
//! #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
//! pub enum Relation {}
//!
//! impl ActiveModelBehavior for ActiveModel {}
//!
//! impl SoftDeleteEntity for Entity {
//!     const SOFT_DELETE: SoftDeleteConfig = SoftDeleteConfig::new().column("deleted_at");
//! }
//!
//! #[async_trait::async_trait]
//! impl SoftDeleteBehavior for ActiveModel {
//!     async fn soft_deletion_blockers<C>(&self, _db: &C) -> Result<Vec<SoftDeletionBlocker>, DbErr>
//!     where
//!         C: ConnectionTrait,
//!     {
//!         if self.title.as_ref().contains("[pinned]") {
//!             Ok(vec!["post is pinned".into()])
//!         } else {
//!             Ok(Vec::new())
//!         }
//!     }
//! }
//!
//! // later
//! let mut post: ActiveModel = post.into_active_model();
//! post.soft_delete(&db).await?;
//! assert!(post.is_soft_deleted());
//!
//! let live: Vec<Model> = Entity::find().not_soft_deleted().all(&db).await?;
//! ```

mod config;
mod entity;
pub mod error;
mod query;
#[cfg(feature = "tests-cfg")]
#[doc(hidden)]
pub mod tests_cfg;

pub use config::*;
pub use entity::*;
pub use error::*;
pub use query::*;
