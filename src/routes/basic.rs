//! Parameterless routes.

use crate::views::View;

/// `/hello`, any method. Raw text, no view resolution.
pub async fn hello() -> &'static str {
    "Hello World"
}

/// GET `/simple-get`.
pub async fn simple_get() -> View {
    View::new("simple-get")
}

/// GET `/only-get`.
pub async fn only_get() -> View {
    View::new("only-get")
}

/// POST `/post`.
pub async fn post() -> View {
    View::new("post")
}

/// GET `/simple-form-for-display-post`.
pub async fn simple_form_for_display_post() -> View {
    View::new("simple-form-for-display-post")
}
