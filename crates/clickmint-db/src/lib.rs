/*!
# Ledger Database Lifecycle

This crate owns how ledger databases come into existence:

1. **Create** a scratch database with `new_writeable_ledger_db()` (temp-file
   backed, migrations applied)
2. **Create or open** a persistent database file with `open_ledger_db()`
3. **Backup** any ledger database to a compact, read-only file with
   `backup_ledger_db()` for archival
4. **Open** archived files in read-only mode with `open_readonly_ledger_db()`

All connections are SeaORM `DatabaseConnection`s over sqlite.
*/

use clickmint_migrations::MigratorTrait as _;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use std::path::Path;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    SeaOrm(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn sqlite_url(path: &Path, query: &str) -> Url {
    let mut url = Url::parse("sqlite:///").expect("sqlite:/// is a valid URL base");
    url.set_path(&path.to_string_lossy());
    url.set_query(Some(query));
    url
}

/// Create a new writeable ledger database.
///
/// This creates a fresh, empty database with all migrations applied, ready for
/// registering accounts. The database is backed by a temporary file but this is
/// an implementation detail - callers should treat it as an ephemeral
/// writeable space.
pub async fn new_writeable_ledger_db() -> Result<DatabaseConnection> {
    // Implementation note: We use a temporary file rather than :memory: because
    // VACUUM INTO (used by backup_ledger_db) doesn't work reliably with
    // in-memory databases
    let temp = tempfile::NamedTempFile::new()?;
    let path = temp.path().to_path_buf();

    let conn = Database::connect(sqlite_url(&path, "mode=rw").as_str()).await?;
    clickmint_migrations::Migrator::up(&conn, None).await?;

    // Keep the temp file alive by forgetting it (cleaned up when process exits)
    std::mem::forget(temp);

    Ok(conn)
}

/// Open (or create) a persistent ledger database file.
///
/// Migrations are applied on every open, so a database created by an older
/// build is upgraded in place.
pub async fn open_ledger_db<P: AsRef<Path>>(path: P) -> Result<DatabaseConnection> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let conn = Database::connect(sqlite_url(path, "mode=rwc").as_str()).await?;
    clickmint_migrations::Migrator::up(&conn, None).await?;

    Ok(conn)
}

/// Open an archived ledger database in read-only mode.
///
/// The file should have been created with `backup_ledger_db()`.
pub async fn open_readonly_ledger_db<P: AsRef<Path>>(path: P) -> Result<DatabaseConnection> {
    let path = path.as_ref();
    let conn = Database::connect(sqlite_url(path, "mode=ro").as_str()).await?;
    Ok(conn)
}

/// Backup a ledger database to a file for archival.
///
/// The file is marked read-only after creation to prevent accidental
/// modification.
///
/// # Errors
///
/// Returns an error if the target file already exists.
pub async fn backup_ledger_db<P: AsRef<Path>>(conn: &DatabaseConnection, path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Database file already exists: {}", path.display()),
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use SQLite's VACUUM INTO to create a compact copy
    let path_str = path.to_string_lossy();
    let vacuum_stmt = sea_orm::Statement::from_string(
        sea_orm::DbBackend::Sqlite,
        format!("VACUUM INTO '{}'", path_str.replace("'", "''")),
    );

    conn.execute(vacuum_stmt).await?;

    if !path.exists() {
        return Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            "Database file was not created",
        )));
    }

    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_readonly(true);
    std::fs::set_permissions(path, perms)?;

    Ok(())
}
