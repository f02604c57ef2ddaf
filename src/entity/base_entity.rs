use crate::{SoftDeleteConfig, SoftDeleteQuery};
use chrono::{DateTime, Utc};
use sea_orm::{DbErr, EntityName, EntityTrait, IdenStatic, Iterable, Select};
use sea_orm::sea_query::{Alias, Expr, SimpleExpr};

/// An entity whose rows are soft deleted.
///
/// The only required item is the implementation itself; the column defaults to
/// [`DEFAULT_SOFT_DELETE_COLUMN`](crate::DEFAULT_SOFT_DELETE_COLUMN).
///
/// ```ignore
/// impl SoftDeleteEntity for Entity {
///     const SOFT_DELETE: SoftDeleteConfig = SoftDeleteConfig::new().column("deleted_at");
/// }
/// ```
pub trait SoftDeleteEntity: EntityTrait {
    /// Settings of this entity
    const SOFT_DELETE: SoftDeleteConfig = SoftDeleteConfig::new();

    /// Name of the soft delete column
    fn soft_delete_column() -> &'static str {
        Self::SOFT_DELETE.column_name()
    }

    /// The clock read when a row is soft deleted
    fn soft_delete_now() -> DateTime<Utc> {
        Utc::now()
    }

    /// `"table"."column" IS NOT NULL`
    fn soft_deleted_expr() -> SimpleExpr {
        soft_delete_column_expr::<Self>().is_not_null()
    }

    /// `"table"."column" IS NULL`
    fn not_soft_deleted_expr() -> SimpleExpr {
        soft_delete_column_expr::<Self>().is_null()
    }

    /// Select the rows that are soft deleted
    fn find_soft_deleted() -> Select<Self> {
        Self::find().soft_deleted()
    }

    /// Select the rows that are not soft deleted
    fn find_not_soft_deleted() -> Select<Self> {
        Self::find().not_soft_deleted()
    }
}

fn soft_delete_column_expr<E>() -> Expr
where
    E: SoftDeleteEntity,
{
    Expr::col((E::default(), Alias::new(E::soft_delete_column())))
}

/// The column variant whose name is the configured soft delete column
pub(crate) fn find_soft_delete_column<E>() -> Option<E::Column>
where
    E: SoftDeleteEntity,
{
    let name = E::soft_delete_column();
    E::Column::iter().find(|col| col.as_str() == name)
}

pub(crate) fn soft_delete_column<E>() -> Result<E::Column, DbErr>
where
    E: SoftDeleteEntity,
{
    find_soft_delete_column::<E>().ok_or_else(|| {
        DbErr::Custom(format!(
            "Soft delete column `{}` not found in entity `{}`",
            E::soft_delete_column(),
            E::default().table_name()
        ))
    })
}

#[cfg(test)]
mod tests {
    use crate::{tests_cfg::*, *};
    use pretty_assertions::assert_eq;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn soft_delete_column_name() {
        assert_eq!(note::Entity::soft_delete_column(), "soft_deleted_at");
        assert_eq!(post::Entity::soft_delete_column(), "deleted_at");
        assert_eq!(comment::Entity::soft_delete_column(), "archived_at");
    }

    #[test]
    fn resolve_column() {
        assert!(matches!(
            super::soft_delete_column::<note::Entity>(),
            Ok(note::Column::SoftDeletedAt)
        ));
        assert!(matches!(
            super::soft_delete_column::<post::Entity>(),
            Ok(post::Column::DeletedAt)
        ));
        assert_eq!(
            super::soft_delete_column::<comment::Entity>()
                .unwrap_err()
                .to_string(),
            "Custom Error: Soft delete column `archived_at` not found in entity `comment`"
        );
    }

    #[test]
    fn find_soft_deleted() {
        assert_eq!(
            post::Entity::find_soft_deleted()
                .build(DbBackend::Postgres)
                .to_string(),
            r#"SELECT "post"."id", "post"."title", "post"."deleted_at" FROM "post" WHERE "post"."deleted_at" IS NOT NULL"#
        );
        assert_eq!(
            note::Entity::find_not_soft_deleted()
                .build(DbBackend::MySql)
                .to_string(),
            "SELECT `note`.`id`, `note`.`body`, `note`.`soft_deleted_at` FROM `note` WHERE `note`.`soft_deleted_at` IS NULL"
        );
    }

    #[test]
    fn predicate_without_column_variant() {
        assert_eq!(
            comment::Entity::find_not_soft_deleted()
                .build(DbBackend::Sqlite)
                .to_string(),
            r#"SELECT "comment"."id", "comment"."text" FROM "comment" WHERE "comment"."archived_at" IS NULL"#
        );
    }
}
