//! Catalog endpoints: listing, detail, add, delete

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookHistory, BookWithStatus, CatalogCounts, CreateBook, SortField, SortOrder},
};

/// Listing query parameters. Unknown sort columns fall back to the title,
/// unknown directions to ascending.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Sort column: title, author, year, genre or barcode
    pub sort: Option<String>,
    /// Sort direction: asc or desc
    pub order: Option<String>,
}

/// Listing response: books with derived statuses plus aggregate counts
#[derive(Serialize, ToSchema)]
pub struct ListingResponse {
    pub books: Vec<BookWithStatus>,
    pub total: usize,
    pub checked_out: usize,
    pub available: usize,
    /// Set when a search matched nothing and the full listing is shown instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ListingResponse {
    pub fn new(books: Vec<BookWithStatus>, counts: CatalogCounts) -> Self {
        Self {
            books,
            total: counts.total,
            checked_out: counts.checked_out,
            available: counts.available,
            error: None,
        }
    }

    pub fn with_error(books: Vec<BookWithStatus>, counts: CatalogCounts, message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::new(books, counts)
        }
    }
}

/// List all books, sorted
#[utoipa::path(
    get,
    path = "/",
    tag = "books",
    params(ListQuery),
    responses(
        (status = 200, description = "Sorted book listing with counts", body = ListingResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListingResponse>> {
    let sort = SortField::from(query.sort.as_deref().unwrap_or("title"));
    let order = SortOrder::from(query.order.as_deref().unwrap_or("asc"));

    let (books, counts) = state.services.catalog.list_sorted(sort, order).await?;
    Ok(Json(ListingResponse::new(books, counts)))
}

/// Book detail with its full checkout history, most recent event first
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book detail and history", body = BookHistory),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<BookHistory>> {
    let history = state.services.circulation.history(id).await?;
    Ok(Json(history))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AddQuery {
    /// Barcode to prefill, as handed over by a failed numeric search
    pub barcode: Option<String>,
}

/// Add-form data
#[derive(Serialize, ToSchema)]
pub struct AddFormResponse {
    /// Prefilled barcode, empty when none was given
    pub barcode: String,
}

/// Show the add-book form data, echoing an optional barcode prefill
#[utoipa::path(
    get,
    path = "/add",
    tag = "books",
    params(AddQuery),
    responses(
        (status = 200, description = "Add-form data", body = AddFormResponse)
    )
)]
pub async fn add_book_form(Query(query): Query<AddQuery>) -> Json<AddFormResponse> {
    Json(AddFormResponse {
        barcode: query.barcode.unwrap_or_default(),
    })
}

/// Add-book form payload. The year arrives as text and degrades to null
/// when empty or malformed.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddBookForm {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[validate(length(min = 1, message = "barcode is required"))]
    pub barcode: String,
}

impl From<AddBookForm> for CreateBook {
    fn from(form: AddBookForm) -> Self {
        Self {
            title: form.title,
            author: form.author,
            year: form.year.as_deref().and_then(|y| y.trim().parse().ok()),
            genre: form.genre.filter(|g| !g.is_empty()),
            barcode: form.barcode,
        }
    }
}

/// Create a book from the form payload and go back to the listing
#[utoipa::path(
    post,
    path = "/add",
    tag = "books",
    request_body(content = AddBookForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Book created, redirect to the listing"),
        (status = 400, description = "Missing required field"),
        (status = 409, description = "Duplicate barcode")
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Form(form): Form<AddBookForm>,
) -> AppResult<Redirect> {
    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    state.services.catalog.create_book(form.into()).await?;
    Ok(Redirect::to("/"))
}

/// Delete a book together with its event history
#[utoipa::path(
    post,
    path = "/delete/{id}",
    tag = "books",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 303, description = "Book deleted, redirect to the listing"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.services.catalog.delete_book(id).await?;
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(year: Option<&str>, genre: Option<&str>) -> AddBookForm {
        AddBookForm {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: year.map(String::from),
            genre: genre.map(String::from),
            barcode: "111".to_string(),
        }
    }

    #[test]
    fn malformed_year_degrades_to_none() {
        assert_eq!(CreateBook::from(form(Some("1965"), None)).year, Some(1965));
        assert_eq!(CreateBook::from(form(Some("MCMLXV"), None)).year, None);
        assert_eq!(CreateBook::from(form(Some(""), None)).year, None);
        assert_eq!(CreateBook::from(form(None, None)).year, None);
    }

    #[test]
    fn empty_genre_degrades_to_none() {
        assert_eq!(CreateBook::from(form(None, Some(""))).genre, None);
        assert_eq!(
            CreateBook::from(form(None, Some("Science Fiction"))).genre,
            Some("Science Fiction".to_string())
        );
    }

    #[test]
    fn missing_required_fields_fail_validation() {
        let mut payload = form(None, None);
        payload.title = String::new();
        assert!(payload.validate().is_err());

        let mut payload = form(None, None);
        payload.barcode = String::new();
        assert!(payload.validate().is_err());

        assert!(form(None, None).validate().is_ok());
    }
}
