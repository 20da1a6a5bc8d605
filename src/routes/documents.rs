//! Document API routes
//!
//! Create, fetch, and list documents, plus the "new documents since last
//! visit" poll that round-trips the last seen id through the
//! `lastSeenDocumentId` cookie. The store only ever sees a plain `Cursor`;
//! cookie encoding stays here.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::cms::{Cursor, Document, DocumentId};
use crate::error::Result;
use crate::state::AppState;

/// Cookie carrying the highest document id a client has seen.
pub const LAST_SEEN_COOKIE: &str = "lastSeenDocumentId";

/// Create the document router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_document).get(list_documents))
        .route("/new", get(new_documents))
        .route("/:id", get(get_document))
}

#[derive(Serialize)]
struct CreatedResponse {
    id: DocumentId,
}

/// Create a document; the assigned id comes back in the body and in the
/// `X-Created-Id` header. A missing or null body is a 400.
async fn create_document(
    State(state): State<AppState>,
    document: Option<Json<Document>>,
) -> Result<Response> {
    let id = state.store().create(document.map(|Json(d)| d)).await?;

    Ok((
        StatusCode::CREATED,
        [("X-Created-Id", id.to_string())],
        Json(CreatedResponse { id }),
    )
        .into_response())
}

/// List all documents, in no guaranteed order.
async fn list_documents(State(state): State<AppState>) -> Json<Vec<Document>> {
    Json(state.store().list_all().await)
}

/// HAL-style document representation with self/all links.
#[derive(Serialize)]
struct DocumentResource {
    author: String,
    title: String,
    #[serde(rename = "_links")]
    links: Links,
}

#[derive(Serialize)]
struct Links {
    #[serde(rename = "self")]
    self_link: Link,
    all: Link,
}

#[derive(Serialize)]
struct Link {
    href: String,
}

impl DocumentResource {
    fn new(id: DocumentId, document: Document) -> Self {
        Self {
            author: document.author,
            title: document.title,
            links: Links {
                self_link: Link {
                    href: format!("/cms/document/{id}"),
                },
                all: Link {
                    href: "/cms/document".to_string(),
                },
            },
        }
    }
}

/// Fetch one document by id as a hypermedia resource.
async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
) -> Result<Response> {
    let document = state.store().get(id).await?;

    Ok((
        [(header::CONTENT_TYPE, "application/hal+json")],
        Json(DocumentResource::new(id, document)),
    )
        .into_response())
}

/// Documents created since the caller's last visit.
///
/// A missing or malformed cookie counts as a first visit. The response
/// always refreshes the cookie, so the client's cursor never regresses.
async fn new_documents(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let cursor = Cursor::parse(cookie_value(&headers, LAST_SEEN_COOKIE));
    let (documents, next) = state.store().new_since(cursor).await;

    (
        [(header::SET_COOKIE, format!("{LAST_SEEN_COOKIE}={next}"))],
        Json(documents),
    )
        .into_response()
}

/// Extract a named cookie value from the request `Cookie` header.
fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn cookie_value_finds_the_named_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session=abc; lastSeenDocumentId=7"),
        );
        assert_eq!(cookie_value(&headers, LAST_SEEN_COOKIE), Some("7"));
    }

    #[test]
    fn cookie_value_handles_missing_header_and_cookie() {
        let headers = HeaderMap::new();
        assert_eq!(cookie_value(&headers, LAST_SEEN_COOKIE), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("session=abc"));
        assert_eq!(cookie_value(&headers, LAST_SEEN_COOKIE), None);
    }
}
