//! Route dispatch table.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, path)
//!     → axum Router (exact path + method match, path variable capture)
//!     → per-route contract bind (binding subsystem)
//!     → handler body (pure: parameters in, View out)
//! ```
//!
//! # Design Decisions
//! - One route per line; the table below is the whole HTTP surface
//! - Unmatched path → 404 via fallback; wrong method on a matched
//!   path → 405 from the method router
//! - Handlers never touch the raw request beyond their declared contract

use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::{any, get, post};
use axum::Router;

pub mod basic;
pub mod cookies;
pub mod owners;
pub mod params;

/// Assemble the full dispatch table.
pub fn router() -> Router {
    Router::new()
        .route("/hello", any(basic::hello))
        .route("/simple-get", get(basic::simple_get))
        .route("/cookie", get(cookies::cookie))
        .route("/set-cookie", get(cookies::set_cookie))
        .route("/only-get", get(basic::only_get))
        .route("/post", post(basic::post))
        .route(
            "/simple-form-for-display-post",
            get(basic::simple_form_for_display_post),
        )
        .route("/only-get-param", get(params::only_get_param))
        .route(
            "/with-required-get-params",
            get(params::with_required_get_params),
        )
        .route(
            "/with-not-required-get-params",
            get(params::with_not_required_get_params),
        )
        .route(
            "/with-not-required-get-params-simple",
            get(params::with_not_required_get_params_simple),
        )
        .route(
            "/with-two-not-required-and-not-required-get-params",
            get(params::with_two_get_params),
        )
        .route("/display-all-get-params", get(params::display_all_get_params))
        .route("/display-get-params", get(params::display_get_params))
        .route("/owners/{owner_id}", get(owners::owner))
        .route("/owners/{owner_id}/pets/{pet_id}", get(owners::owner_pet))
        .fallback(not_found)
}

/// Explicit 404 so unmatched paths are logged.
async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::warn!(path = %uri.path(), "No route matched");
    (StatusCode::NOT_FOUND, "No matching route found")
}
