use super::SharedConnection;
use crate::domain::entities::source_url::{NewSourceUrl, SourceUrl};
use crate::domain::error::DomainError;
use crate::domain::ports::url_repository::UrlRepository;
use rusqlite::params;

pub struct SqliteUrlRepo {
    conn: SharedConnection,
}

impl SqliteUrlRepo {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }
}

impl UrlRepository for SqliteUrlRepo {
    fn add(&self, url: &NewSourceUrl) -> Result<SourceUrl, DomainError> {
        let conn = self.conn.lock()?;
        conn.execute(
            "INSERT INTO urls (name, retailer, model, manufacturer, url) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![url.name, url.retailer, url.model, url.manufacturer, url.url],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add url: {e}")))?;

        Ok(SourceUrl {
            id: conn.last_insert_rowid(),
            name: url.name.clone(),
            retailer: url.retailer.clone(),
            model: url.model.clone(),
            manufacturer: url.manufacturer.clone(),
            url: url.url.clone(),
        })
    }

    fn list(&self) -> Result<Vec<SourceUrl>, DomainError> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, retailer, model, manufacturer, url FROM urls ORDER BY id",
        )?;
        let urls = stmt
            .query_map([], |row| {
                Ok(SourceUrl {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    retailer: row.get(2)?,
                    model: row.get(3)?,
                    manufacturer: row.get(4)?,
                    url: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(urls)
    }

    fn retailers(&self) -> Result<Vec<String>, DomainError> {
        let conn = self.conn.lock()?;
        let mut stmt = conn.prepare("SELECT DISTINCT retailer FROM urls ORDER BY retailer")?;
        let retailers = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(retailers)
    }
}
