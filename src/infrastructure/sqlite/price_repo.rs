use super::{parse_stored_date, SharedConnection};
use crate::domain::entities::price::{NewPrice, Price};
use crate::domain::error::DomainError;
use crate::domain::ports::price_repository::PriceRepository;
use crate::domain::ports::Page;
use rusqlite::{params, Connection, OptionalExtension};

const PRICE_COLUMNS: &str = "id, price, date, retailer, manufacturer, product_id";

pub struct SqlitePriceRepo {
    conn: SharedConnection,
}

impl SqlitePriceRepo {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    fn row_to_price(row: &rusqlite::Row) -> Result<Price, rusqlite::Error> {
        let date_str: String = row.get(2)?;
        Ok(Price {
            id: row.get(0)?,
            price: row.get(1)?,
            date: parse_stored_date(&date_str)?,
            retailer: row.get(3)?,
            manufacturer: row.get(4)?,
            product_id: row.get(5)?,
        })
    }

    fn query_prices(
        conn: &Connection,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Price>, DomainError> {
        let mut stmt = conn.prepare(sql)?;
        let prices = stmt
            .query_map(params, Self::row_to_price)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(prices)
    }
}

/// Shared with the product repository so initial prices land in the same
/// transaction as their product.
pub(crate) fn insert_price(
    conn: &Connection,
    product_id: i64,
    price: &NewPrice,
) -> Result<Price, DomainError> {
    conn.execute(
        "INSERT INTO prices (price, date, retailer, manufacturer, product_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            price.price,
            price.date.to_rfc3339(),
            price.retailer,
            price.manufacturer,
            product_id,
        ],
    )
    .map_err(|e| DomainError::Database(format!("Failed to add price: {e}")))?;

    Ok(Price {
        id: conn.last_insert_rowid(),
        price: price.price,
        date: price.date,
        retailer: price.retailer.clone(),
        manufacturer: price.manufacturer.clone(),
        product_id,
    })
}

impl PriceRepository for SqlitePriceRepo {
    fn add(&self, product_id: i64, price: &NewPrice) -> Result<Price, DomainError> {
        let conn = self.conn.lock()?;
        insert_price(&conn, product_id, price)
    }

    fn list(&self, page: &Page) -> Result<Vec<Price>, DomainError> {
        let conn = self.conn.lock()?;
        let limit = page.limit.map(|l| l as i64).unwrap_or(-1);
        Self::query_prices(
            &conn,
            &format!("SELECT {PRICE_COLUMNS} FROM prices ORDER BY id LIMIT ?1 OFFSET ?2"),
            params![limit, page.skip as i64],
        )
    }

    fn list_for_product(&self, product_id: i64) -> Result<Vec<Price>, DomainError> {
        let conn = self.conn.lock()?;
        Self::query_prices(
            &conn,
            &format!(
                "SELECT {PRICE_COLUMNS} FROM prices WHERE product_id = ?1 ORDER BY price DESC, id"
            ),
            params![product_id],
        )
    }

    fn lowest_for_product(&self, product_id: i64) -> Result<Option<Price>, DomainError> {
        let conn = self.conn.lock()?;
        let price = conn
            .query_row(
                &format!(
                    "SELECT {PRICE_COLUMNS} FROM prices
                     WHERE product_id = ?1 AND price > 0
                     ORDER BY price ASC, id LIMIT 1"
                ),
                params![product_id],
                Self::row_to_price,
            )
            .optional()?;
        Ok(price)
    }

    fn delete(&self, id: i64) -> Result<usize, DomainError> {
        let conn = self.conn.lock()?;
        let rows = conn.execute("DELETE FROM prices WHERE id = ?1", params![id])?;
        Ok(rows)
    }
}
