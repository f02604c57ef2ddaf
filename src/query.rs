use crate::SoftDeleteEntity;
use sea_orm::{DeleteMany, QueryFilter, Select, UpdateMany};

/// Restrict a query to rows that are, or are not, soft deleted.
///
/// The predicate is added with [`QueryFilter::filter`], so it composes with any
/// other condition, ordering or pagination.
///
/// ```
/// use sea_orm::{entity::*, query::*, DbBackend};
/// use sea_orm_soft_delete::{tests_cfg::post, SoftDeleteQuery};
///
/// assert_eq!(
///     post::Entity::find()
///         .filter(post::Column::Title.contains("rust"))
///         .not_soft_deleted()
///         .order_by_asc(post::Column::Id)
///         .build(DbBackend::Postgres)
///         .to_string(),
///     [
///         r#"SELECT "post"."id", "post"."title", "post"."deleted_at" FROM "post""#,
///         r#"WHERE "post"."title" LIKE '%rust%' AND "post"."deleted_at" IS NULL"#,
///         r#"ORDER BY "post"."id" ASC"#,
///     ]
///     .join(" ")
/// );
/// ```
pub trait SoftDeleteQuery: QueryFilter + Sized {
    /// Keep only the rows whose soft delete column is not null
    fn soft_deleted(self) -> Self;

    /// Keep only the rows whose soft delete column is null
    fn not_soft_deleted(self) -> Self;
}

macro_rules! impl_soft_delete_query {
    ($ty: ident) => {
        impl<E> SoftDeleteQuery for $ty<E>
        where
            E: SoftDeleteEntity,
        {
            fn soft_deleted(self) -> Self {
                self.filter(E::soft_deleted_expr())
            }

            fn not_soft_deleted(self) -> Self {
                self.filter(E::not_soft_deleted_expr())
            }
        }
    };
}

impl_soft_delete_query!(Select);
impl_soft_delete_query!(UpdateMany);
impl_soft_delete_query!(DeleteMany);

#[cfg(test)]
mod tests {
    use crate::{tests_cfg::*, *};
    use pretty_assertions::assert_eq;
    use sea_orm::{ColumnTrait, DbBackend, EntityTrait, QueryFilter, QueryTrait, sea_query::Expr};

    #[test]
    fn select_soft_deleted() {
        assert_eq!(
            note::Entity::find()
                .soft_deleted()
                .build(DbBackend::Postgres)
                .to_string(),
            r#"SELECT "note"."id", "note"."body", "note"."soft_deleted_at" FROM "note" WHERE "note"."soft_deleted_at" IS NOT NULL"#
        );
    }

    #[test]
    fn select_not_soft_deleted_by_id() {
        assert_eq!(
            post::Entity::find_by_id(3)
                .not_soft_deleted()
                .build(DbBackend::Sqlite)
                .to_string(),
            r#"SELECT "post"."id", "post"."title", "post"."deleted_at" FROM "post" WHERE "post"."id" = 3 AND "post"."deleted_at" IS NULL"#
        );
    }

    #[test]
    fn update_many_not_soft_deleted() {
        assert_eq!(
            post::Entity::update_many()
                .col_expr(post::Column::Title, Expr::value("Archived"))
                .not_soft_deleted()
                .build(DbBackend::Postgres)
                .to_string(),
            r#"UPDATE "post" SET "title" = 'Archived' WHERE "post"."deleted_at" IS NULL"#
        );
    }

    #[test]
    fn delete_many_soft_deleted() {
        assert_eq!(
            post::Entity::delete_many()
                .soft_deleted()
                .filter(post::Column::Id.lt(10))
                .build(DbBackend::MySql)
                .to_string(),
            "DELETE FROM `post` WHERE `post`.`deleted_at` IS NOT NULL AND `post`.`id` < 10"
        );
    }
}
