use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema};
use sea_orm_soft_delete::tests_cfg::{comment, note, post};
use tracing_subscriber::EnvFilter;

/// A fresh in-memory SQLite database with every fixture table
pub async fn setup() -> Result<DatabaseConnection, DbErr> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let db = Database::connect("sqlite::memory:").await?;
    create_table(&db, note::Entity).await?;
    create_table(&db, post::Entity).await?;
    create_table(&db, comment::Entity).await?;
    Ok(db)
}

async fn create_table<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(entity)))
        .await?;
    Ok(())
}
