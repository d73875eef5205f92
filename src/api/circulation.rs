//! Circulation endpoints: checkout and checkin

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppResult;

/// Record a checkout and return to the book's history page
#[utoipa::path(
    post,
    path = "/checkout/{id}",
    tag = "circulation",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 303, description = "Checkout recorded, redirect to the book page"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.services.circulation.checkout(id).await?;
    Ok(Redirect::to(&format!("/book/{}", id)))
}

/// Record a checkin and return to the book's history page
#[utoipa::path(
    post,
    path = "/checkin/{id}",
    tag = "circulation",
    params(("id" = i32, Path, description = "Book ID")),
    responses(
        (status = 303, description = "Checkin recorded, redirect to the book page"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn checkin_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.services.circulation.checkin(id).await?;
    Ok(Redirect::to(&format!("/book/{}", id)))
}
