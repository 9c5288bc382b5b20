//! Cookie routes: the only route with a side effect (`/set-cookie`).

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::{header, HeaderMap};
use axum::response::{AppendHeaders, IntoResponse};

use crate::binding::{BindError, ParamSpec, QueryContract};
use crate::http::cookies::{parse_cookies, set_cookie_value};
use crate::views::View;

/// Expiry applied to cookies baked by `/set-cookie`.
pub const COOKIE_MAX_AGE_SECS: u64 = 1000;

/// GET `/cookie`: requires a `name` cookie on the request.
pub async fn cookie(headers: HeaderMap) -> Result<View, BindError> {
    let cookies = parse_cookies(&headers);
    let name = cookies
        .get("name")
        .ok_or_else(|| BindError::MissingCookie("name".to_string()))?;

    Ok(View::new("cookie").with("name", name.as_str()))
}

const SET_COOKIE: QueryContract = QueryContract::new(&[
    ParamSpec::required("name"),
    ParamSpec::required("value"),
]);

/// GET `/set-cookie?name=foo&value=bar`: bakes the cookie into the
/// response and confirms with plain text.
pub async fn set_cookie(
    Query(raw): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, BindError> {
    let params = SET_COOKIE.bind(&raw)?;
    let name = params
        .text("name")
        .ok_or_else(|| BindError::MissingParameter("name".to_string()))?;
    let value = params
        .text("value")
        .ok_or_else(|| BindError::MissingParameter("value".to_string()))?;

    tracing::debug!(cookie = name, "Baking response cookie");
    let header = set_cookie_value(name, value, COOKIE_MAX_AGE_SECS);
    Ok((
        AppendHeaders([(header::SET_COOKIE, header)]),
        "cookie created",
    ))
}
