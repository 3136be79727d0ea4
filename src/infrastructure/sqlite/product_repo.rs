use super::price_repo::insert_price;
use super::SharedConnection;
use crate::domain::entities::product::{NewProduct, Product};
use crate::domain::error::DomainError;
use crate::domain::ports::product_repository::ProductRepository;
use crate::domain::ports::Page;
use rusqlite::{params, OptionalExtension};

const PRODUCT_COLUMNS: &str = "id, name, category, tags";

pub struct SqliteProductRepo {
    conn: SharedConnection,
}

impl SqliteProductRepo {
    pub fn new(conn: SharedConnection) -> Self {
        Self { conn }
    }

    fn row_to_product(row: &rusqlite::Row) -> Result<Product, rusqlite::Error> {
        Ok(Product {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
            tags: row.get(3)?,
        })
    }
}

impl ProductRepository for SqliteProductRepo {
    fn add(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let mut conn = self.conn.lock()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO products (name, category, tags) VALUES (?1, ?2, ?3)",
            params![product.name, product.category, product.tags],
        )?;
        let id = tx.last_insert_rowid();
        for price in &product.prices {
            insert_price(&tx, id, price)?;
        }
        tx.commit()?;

        Ok(Product {
            id,
            name: product.name.clone(),
            category: product.category.clone(),
            tags: product.tags.clone(),
        })
    }

    fn get(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let conn = self.conn.lock()?;
        let product = conn
            .query_row(
                &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"),
                params![id],
                Self::row_to_product,
            )
            .optional()?;
        Ok(product)
    }

    fn get_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let conn = self.conn.lock()?;
        let product = conn
            .query_row(
                &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE name = ?1"),
                params![name],
                Self::row_to_product,
            )
            .optional()?;
        Ok(product)
    }

    fn list(&self, page: &Page) -> Result<Vec<Product>, DomainError> {
        let conn = self.conn.lock()?;
        // SQLite treats a negative LIMIT as "no limit".
        let limit = page.limit.map(|l| l as i64).unwrap_or(-1);
        let mut stmt = conn.prepare(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id LIMIT ?1 OFFSET ?2"
        ))?;
        let products = stmt
            .query_map(params![limit, page.skip as i64], Self::row_to_product)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    fn delete(&self, id: i64) -> Result<usize, DomainError> {
        let mut conn = self.conn.lock()?;
        let tx = conn.transaction()?;
        tx.execute("DELETE FROM prices WHERE product_id = ?1", params![id])?;
        let rows = tx.execute("DELETE FROM products WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(rows)
    }
}
