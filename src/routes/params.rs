//! Query-parameter routes.
//!
//! Each route declares its contract as a const next to the handler; the
//! contract is bound before any handler logic, so a 400 never reaches the
//! view-building code.

use std::collections::HashMap;

use axum::extract::Query;
use serde_json::Value;

use crate::binding::{BindError, ParamSpec, QueryContract};
use crate::views::View;

const ONLY_GET_PARAM: QueryContract = QueryContract::new(&[ParamSpec::flag("new")]);

/// GET `/only-get-param?new`: the key must be present, no value needed.
pub async fn only_get_param(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<View, BindError> {
    ONLY_GET_PARAM.bind(&raw)?;
    Ok(View::new("only-get-param"))
}

const WITH_REQUIRED: QueryContract = QueryContract::new(&[ParamSpec::required("name")]);

/// GET `/with-required-get-params?name=petya`.
pub async fn with_required_get_params(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<View, BindError> {
    let params = WITH_REQUIRED.bind(&raw)?;
    Ok(View::new("with-required-get-params").with("name", params.text("name")))
}

const WITH_NOT_REQUIRED: QueryContract =
    QueryContract::new(&[ParamSpec::optional_with_default("name", "World")]);

/// GET `/with-not-required-get-params`: absent `name` binds "World".
pub async fn with_not_required_get_params(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<View, BindError> {
    let params = WITH_NOT_REQUIRED.bind(&raw)?;
    Ok(View::new("with-not-required-get-params").with("name", params.text("name")))
}

const WITH_NOT_REQUIRED_SIMPLE: QueryContract = QueryContract::new(&[
    ParamSpec::optional("name"),
    ParamSpec::optional("error"),
]);

/// GET `/with-not-required-get-params-simple`: no defaults; absent
/// parameters bind null.
pub async fn with_not_required_get_params_simple(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<View, BindError> {
    let params = WITH_NOT_REQUIRED_SIMPLE.bind(&raw)?;
    Ok(View::new("with-not-required-get-params-simple")
        .with("name", params.text("name"))
        .with("error", params.text("error")))
}

const WITH_TWO: QueryContract = QueryContract::new(&[
    ParamSpec::required("name"),
    ParamSpec::optional_integer_with_default("age", "18"),
]);

/// GET `/with-two-not-required-and-not-required-get-params?name=petya&age=20`.
pub async fn with_two_get_params(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<View, BindError> {
    let params = WITH_TWO.bind(&raw)?;
    Ok(View::new("with-two-get-params")
        .with("name", params.text("name"))
        .with("age", params.integer("age")))
}

/// GET `/display-all-get-params`: the whole query map, bound verbatim.
pub async fn display_all_get_params(Query(raw): Query<HashMap<String, String>>) -> View {
    let map: serde_json::Map<String, Value> = raw
        .iter()
        .map(|(k, v)| (k.clone(), Value::from(v.as_str())))
        .collect();
    View::new("display-all-get-params").with("requestParams", Value::Object(map))
}

const DISPLAY_GET_PARAMS: QueryContract = QueryContract::new(&[
    ParamSpec::required("name"),
    ParamSpec::required_integer("age"),
]);

/// GET `/display-get-params?name=petya&age=20`: `age` must be numeric.
pub async fn display_get_params(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<View, BindError> {
    let params = DISPLAY_GET_PARAMS.bind(&raw)?;
    Ok(View::new("display-get-params")
        .with("userName", params.text("name"))
        .with("age", params.integer("age")))
}
