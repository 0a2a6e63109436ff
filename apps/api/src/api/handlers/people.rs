use axum::{http::StatusCode, Json};
use serde_json::{json, Map, Value};

use crate::api::errors::ApiError;
use crate::api::extract::{PathParam, ValidJson, ValidQuery};
use crate::domain::person::{LocatedPerson, Person, PersonOut, PersonWithLocation};
use crate::domain::query::{check_positive_id, PersonDetailQuery};

/// GET /
pub async fn home() -> Json<Value> {
    Json(json!({ "hello": "world" }))
}

/// Create a person and echo it back without the password
///
/// POST /person/new
pub async fn create_person(
    ValidJson(person): ValidJson<Person>,
) -> (StatusCode, Json<PersonOut>) {
    tracing::info!(first_name = %person.base.first_name, "Person created");
    (StatusCode::CREATED, Json(PersonOut::from(person)))
}

/// Look a person up by name and age
///
/// Responds with a single-entry object mapping the name (or `"null"` when
/// no name was given) to the age.
///
/// GET /person/detail?name=..&age=..
pub async fn show_person(
    ValidQuery(query): ValidQuery<PersonDetailQuery>,
) -> Json<Map<String, Value>> {
    let key = query.name.unwrap_or_else(|| "null".to_string());
    let mut body = Map::new();
    body.insert(key, Value::String(query.age));
    Json(body)
}

/// GET /person/detail/:person_id
pub async fn show_person_by_id(
    PathParam(person_id): PathParam<i64>,
) -> Result<Json<Map<String, Value>>, ApiError> {
    let person_id = check_positive_id(person_id)?;

    let mut body = Map::new();
    body.insert(person_id.to_string(), json!("it exists!"));
    Ok(Json(body))
}

/// Replace a person and their location
///
/// PUT /person/:person_id
pub async fn update_person(
    PathParam(person_id): PathParam<i64>,
    ValidJson(payload): ValidJson<PersonWithLocation>,
) -> Result<(StatusCode, Json<LocatedPerson>), ApiError> {
    let person_id = check_positive_id(person_id)?;
    tracing::info!(person_id, city = %payload.location.city, "Person updated");

    Ok((StatusCode::ACCEPTED, Json(LocatedPerson::from(payload))))
}
