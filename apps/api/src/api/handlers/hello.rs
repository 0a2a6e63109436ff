use axum::{response::Redirect, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::extract::QueryParams;
use crate::api::middleware::QueryOrCookie;
use crate::domain::query::CommonQueryParams;

/// Stand-in item table for the paging demo
pub const FAKE_ITEMS: [&str; 3] = ["Foo", "Bar", "Baz"];

#[derive(Debug, Serialize)]
pub struct FakeItem {
    pub item_name: &'static str,
}

/// Response for the paged team listing
#[derive(Debug, Serialize)]
pub struct TeamsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    pub items: Vec<FakeItem>,
}

#[derive(Debug, Serialize)]
pub struct DecoratedItem {
    pub item: &'static str,
}

/// GET /
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Hello World!" }))
}

/// Echo the shared query parameters
///
/// GET /items/
pub async fn read_items(
    QueryParams(commons): QueryParams<CommonQueryParams>,
) -> Json<CommonQueryParams> {
    Json(commons)
}

/// Same shared parameters, different path
///
/// GET /users/
pub async fn read_users(
    QueryParams(commons): QueryParams<CommonQueryParams>,
) -> Json<CommonQueryParams> {
    Json(commons)
}

/// Page through the fake item table
///
/// GET /teams/
pub async fn read_teams(
    QueryParams(commons): QueryParams<CommonQueryParams>,
) -> Json<TeamsResponse> {
    let items = commons
        .page(&FAKE_ITEMS)
        .iter()
        .map(|&item_name| FakeItem { item_name })
        .collect();

    Json(TeamsResponse {
        q: commons.search().map(str::to_string),
        items,
    })
}

/// Report the search term from the query string or the last-query cookie
///
/// GET /query/
pub async fn read_query(QueryOrCookie(q): QueryOrCookie) -> Json<Value> {
    Json(json!({ "q_or_cookie": q }))
}

/// Items behind the X-Token / X-Key guards
///
/// GET /items-decoration/
pub async fn read_decorated_items() -> Json<Vec<DecoratedItem>> {
    Json(vec![
        DecoratedItem { item: "Foo" },
        DecoratedItem { item: "Bar" },
    ])
}

/// GET /redirect
pub async fn redirect() -> Redirect {
    Redirect::temporary("items")
}
