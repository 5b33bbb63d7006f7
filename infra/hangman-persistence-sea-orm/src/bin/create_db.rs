use hangman_persistence_sea_orm::{create_db_pool, create_tables};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_url =
        std::env::var("HANGMAN_DATABASE_URL").expect("HANGMAN_DATABASE_URL env var not set");
    let pool = create_db_pool(&db_url)
        .await
        .expect("Failed to connect to database");

    create_tables(&pool)
        .await
        .expect("Failed to create database tables");

    println!("Created database tables successfully");
}
