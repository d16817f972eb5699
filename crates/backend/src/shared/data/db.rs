use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/app.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Нормализация разделителей и ведущего слэша для sqlite-URL на Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    create_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("database connection already initialized"))?;
    Ok(())
}

async fn create_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let create_log_entry = r#"
        CREATE TABLE IF NOT EXISTS log_entry (
            id TEXT PRIMARY KEY NOT NULL,
            datetime TEXT NOT NULL,
            level TEXT NOT NULL,
            input TEXT NOT NULL,
            output TEXT NOT NULL,
            info TEXT NOT NULL,
            size INTEGER NOT NULL DEFAULT 0,
            success INTEGER NOT NULL DEFAULT 0
        );
    "#;
    let create_log_entry_index = r#"
        CREATE INDEX IF NOT EXISTS idx_log_entry_datetime ON log_entry (datetime);
    "#;
    let create_processing_config = r#"
        CREATE TABLE IF NOT EXISTS processing_config (
            id TEXT PRIMARY KEY NOT NULL,
            input TEXT NOT NULL,
            output TEXT NOT NULL,
            args TEXT NOT NULL DEFAULT '[]'
        );
    "#;

    for statement in [
        create_log_entry,
        create_log_entry_index,
        create_processing_config,
    ] {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            statement.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN.get().expect("database is not initialized")
}
