//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, circulation, health, search};
use crate::error::ErrorResponse;
use crate::models::{
    book::{Book, BookHistory, BookWithStatus, CatalogCounts},
    event::{CheckoutEvent, EventKind},
    status::Availability,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shelfmark API",
        version = "0.1.0",
        description = "Library catalog server with event-sourced circulation",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::add_book_form,
        books::add_book,
        books::delete_book,
        // Circulation
        circulation::checkout_book,
        circulation::checkin_book,
        // Search
        search::search_books,
        search::author_books,
        search::checked_out_books,
    ),
    components(schemas(
        Book,
        BookWithStatus,
        BookHistory,
        CatalogCounts,
        CheckoutEvent,
        EventKind,
        Availability,
        books::ListingResponse,
        books::AddFormResponse,
        books::AddBookForm,
        search::AuthorResponse,
        search::CheckedOutResponse,
        health::HealthResponse,
        ErrorResponse,
    )),
    tags(
        (name = "books", description = "Catalog CRUD"),
        (name = "circulation", description = "Checkout/checkin event log"),
        (name = "search", description = "Search and filters"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the generated document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
