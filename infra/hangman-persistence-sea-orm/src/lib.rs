use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};

pub mod entity;
pub mod games;
pub mod scores;
pub mod users;

pub async fn create_db_pool(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);
    if database_url.contains(":memory:") {
        // every sqlite memory connection is its own database
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(5);
    }
    opt.sqlx_logging(false);

    Database::connect(opt).await
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;
    Ok(())
}

pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, entity::user::Entity).await?;
    create_table(db, entity::game::Entity).await?;
    create_table(db, entity::score::Entity).await?;
    log::info!("Database tables ready");
    Ok(())
}
