//! Request handlers
//!
//! GET /                  greeting page
//! GET /list              creatures, optional `type` filter and `sortby` field
//! GET /list/:category    raw `pokemons`, `types` or `moves` collection
//! GET /get/:name         creature, type or move by exact name
//! GET /get               creature with the `max`/`min` value of `feature`
//! GET /count             number of moves of the creature named by `pokemon`

use axum::extract::{Path, Query, State};
use axum::response::{Html, Response};
use pokedex_query::{Extremum, ListQuery, QueryError};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

const HOME_PAGE: &str = "<h1>Pokedex API Home</h1>";

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub sortby: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExtremumParams {
    pub func: Option<String>,
    pub feature: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CountParams {
    pub pokemon: Option<String>,
}

pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, ApiError> {
    let query = ListQuery {
        type_name: params.type_name,
        sort_by: params.sortby,
    };

    let creatures = pokedex_query::list(&state.dataset, &query)?;
    tracing::debug!(
        type_name = ?query.type_name,
        sort_by = ?query.sort_by,
        count = creatures.len(),
        "Listed creatures"
    );

    state.json(&creatures)
}

pub async fn list_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Response, ApiError> {
    let collection = pokedex_query::list_category(&state.dataset, &category)?;
    state.json(&collection)
}

pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let entry = pokedex_query::get_by_name(&state.dataset, &name).ok_or(ApiError::NotFound)?;
    tracing::debug!(name = %name, category = %entry.category(), "Found record");
    state.json(&entry)
}

pub async fn get_extremum(
    State(state): State<AppState>,
    Query(params): Query<ExtremumParams>,
) -> Result<Response, ApiError> {
    let func = non_empty(params.func)
        .ok_or_else(|| ApiError::InvalidExtremum("missing func".to_string()))?;
    let feature = non_empty(params.feature)
        .ok_or_else(|| ApiError::InvalidExtremum("missing feature".to_string()))?;

    let func: Extremum = func
        .parse()
        .map_err(|err: QueryError| ApiError::InvalidExtremum(err.to_string()))?;

    let creature = match pokedex_query::extremum(&state.dataset, func, &feature) {
        Ok(creature) => creature.ok_or(ApiError::NotFound)?,
        // A feature the creatures do not have is a bad request, not bad data
        Err(err @ QueryError::MissingField { .. }) => {
            return Err(ApiError::InvalidExtremum(err.to_string()));
        }
        Err(err) => return Err(err.into()),
    };

    state.json(creature)
}

pub async fn count(
    State(state): State<AppState>,
    Query(params): Query<CountParams>,
) -> Result<Response, ApiError> {
    let name = non_empty(params.pokemon).ok_or(ApiError::MissingParameter("pokemon"))?;
    let count = pokedex_query::count_moves(&state.dataset, &name).ok_or(ApiError::NotFound)?;
    state.json(&count)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
