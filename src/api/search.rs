//! Search, author and availability-filter endpoints

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    models::book::{Book, BookWithStatus},
    services::catalog::SearchOutcome,
};

use super::books::ListingResponse;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Search term; matched against title, author, genre, barcode and,
    /// when short and numeric, the publication year
    pub query: Option<String>,
}

/// Search the catalog.
///
/// The response depends on how many books match: redirect to the single
/// match, redirect to the add form for an unmatched numeric query, the
/// annotated full listing for an unmatched text query, or the filtered
/// subset with counts.
#[utoipa::path(
    get,
    path = "/search",
    tag = "search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching books with counts, or the annotated full listing", body = ListingResponse),
        (status = 303, description = "Redirect: single match, unmatched numeric query, or empty query")
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Response> {
    let query = params.query.unwrap_or_default();

    let response = match state.services.catalog.search(&query).await? {
        SearchOutcome::FullListing => Redirect::to("/").into_response(),
        SearchOutcome::AddWithBarcode(barcode) => {
            Redirect::to(&format!("/add?barcode={}", barcode)).into_response()
        }
        SearchOutcome::Single(book_id) => {
            Redirect::to(&format!("/book/{}", book_id)).into_response()
        }
        SearchOutcome::NoMatches {
            books,
            counts,
            message,
        } => Json(ListingResponse::with_error(books, counts, message)).into_response(),
        SearchOutcome::Many { books, counts } => {
            Json(ListingResponse::new(books, counts)).into_response()
        }
    };

    Ok(response)
}

/// Books by one author
#[derive(Serialize, ToSchema)]
pub struct AuthorResponse {
    pub author: String,
    pub books: Vec<Book>,
}

/// Case-insensitive exact-match author lookup
#[utoipa::path(
    get,
    path = "/author/{name}",
    tag = "search",
    params(("name" = String, Path, description = "Author name, matched case-insensitively")),
    responses(
        (status = 200, description = "Books by the author", body = AuthorResponse)
    )
)]
pub async fn author_books(
    State(state): State<crate::AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<AuthorResponse>> {
    let books = state.services.catalog.by_author(&name).await?;
    Ok(Json(AuthorResponse {
        author: name,
        books,
    }))
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct CheckedOutQuery {
    /// `checked out` selects the checked-out books; anything else selects
    /// the available ones
    pub state: Option<String>,
}

/// Availability-filtered listing
#[derive(Serialize, ToSchema)]
pub struct CheckedOutResponse {
    pub state: String,
    pub books: Vec<BookWithStatus>,
}

/// Filter the catalog by derived availability
#[utoipa::path(
    get,
    path = "/checked-out",
    tag = "search",
    params(CheckedOutQuery),
    responses(
        (status = 200, description = "Books in the requested state", body = CheckedOutResponse)
    )
)]
pub async fn checked_out_books(
    State(state): State<crate::AppState>,
    Query(params): Query<CheckedOutQuery>,
) -> AppResult<Json<CheckedOutResponse>> {
    let wanted = params.state.unwrap_or_else(|| "checked out".to_string());
    let books = state.services.catalog.by_availability(&wanted).await?;
    Ok(Json(CheckedOutResponse {
        state: wanted,
        books,
    }))
}
