use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteConnectOptions, FromRow, Pool, Sqlite};

pub type Db = Pool<Sqlite>;

// Lead model
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lead {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: String,
    pub position: i64,
}

// Create connection pool - the leads database is created on first run
pub async fn create_pool(url: &str) -> Db {
    let options = SqliteConnectOptions::from_str(url)
        .expect("Invalid database URL")
        .create_if_missing(true);

    sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
        .expect("Failed to connect to database")
}

// Run migrations (create tables if not exist)
pub async fn run_migrations(db: &Db) {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS leads (
            id TEXT PRIMARY KEY,
            full_name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            phone_number TEXT NOT NULL,
            created_at TEXT NOT NULL,
            position INTEGER NOT NULL
        )
        "#,
    )
    .execute(db)
    .await
    .expect("Failed to create leads table");
}

// Lead queries
pub async fn get_lead_by_email(db: &Db, email: &str) -> Option<Lead> {
    sqlx::query_as("SELECT * FROM leads WHERE email = ?")
        .bind(email.to_lowercase())
        .fetch_optional(db)
        .await
        .ok()
        .flatten()
}

pub async fn insert_lead(
    db: &Db,
    id: &str,
    full_name: &str,
    email: &str,
    phone_number: &str,
    created_at: &str,
    position: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO leads (id, full_name, email, phone_number, created_at, position) VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(full_name)
    .bind(email.to_lowercase())
    .bind(phone_number)
    .bind(created_at)
    .bind(position)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn count_leads(db: &Db) -> i64 {
    let row: Option<(i64,)> = sqlx::query_as("SELECT COUNT(*) FROM leads")
        .fetch_optional(db)
        .await
        .ok()
        .flatten();
    row.map(|(c,)| c).unwrap_or(0)
}
