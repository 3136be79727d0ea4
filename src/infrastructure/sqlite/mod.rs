pub mod migrations;
pub mod price_repo;
pub mod product_repo;
pub mod url_repo;

use crate::domain::error::DomainError;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

/// One connection shared by every repository. Cloning hands out another
/// reference to the same connection, so `:memory:` databases stay whole.
#[derive(Clone)]
pub struct SharedConnection(Arc<Mutex<Connection>>);

impl SharedConnection {
    pub fn open(db_path: &str) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| DomainError::Database(format!("foreign_keys error: {e}")))?;
        migrations::run_migrations(&conn)?;
        Ok(Self(Arc::new(Mutex::new(conn))))
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, Connection>, DomainError> {
        self.0
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))
    }
}

pub(crate) fn parse_stored_date(raw: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}
