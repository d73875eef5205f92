//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, SortField, SortOrder},
};

const BOOK_COLUMNS: &str = "id, title, author, year, genre, barcode";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All books ordered by a whitelisted column
    pub async fn list(&self, sort: SortField, order: SortOrder) -> AppResult<Vec<Book>> {
        // ORDER BY cannot take bind parameters; both parts come from enums.
        let query = format!(
            "SELECT {} FROM books ORDER BY {} {}",
            BOOK_COLUMNS,
            sort.column(),
            order.sql()
        );
        Ok(sqlx::query_as::<_, Book>(&query)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!("SELECT {} FROM books WHERE id = $1", BOOK_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Create a new book. A duplicate barcode surfaces as a conflict.
    pub async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(&format!(
            "INSERT INTO books (title, author, year, genre, barcode) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            BOOK_COLUMNS
        ))
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.year)
        .bind(&book.genre)
        .bind(&book.barcode)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx_unique(e, "A book with this barcode already exists"))
    }

    /// Delete a book; its checkout events go with it via the FK cascade.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book with id {} not found", id)));
        }
        Ok(())
    }

    /// Case-insensitive substring match across the text columns, OR'd with
    /// exact year equality when a year candidate is given. A NULL year
    /// parameter drops that predicate.
    pub async fn search(&self, term: &str, year: Option<i32>) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            r#"
            SELECT {}
            FROM books
            WHERE title ILIKE '%' || $1 || '%'
               OR author ILIKE '%' || $1 || '%'
               OR genre ILIKE '%' || $1 || '%'
               OR barcode ILIKE '%' || $1 || '%'
               OR year = $2
            ORDER BY title
            "#,
            BOOK_COLUMNS
        ))
        .bind(term)
        .bind(year)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Case-insensitive exact pattern match on the author name
    pub async fn find_by_author(&self, name: &str) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!(
            "SELECT {} FROM books WHERE author ILIKE $1 ORDER BY title",
            BOOK_COLUMNS
        ))
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }
}
