//! Path-variable routes.
//!
//! Segments are bound verbatim as strings, no type coercion.

use axum::extract::Path;

use crate::views::View;

/// GET `/owners/{ownerId}`.
pub async fn owner(Path(owner_id): Path<String>) -> View {
    View::new("owner-id").with("ownerId", owner_id)
}

/// GET `/owners/{ownerId}/pets/{petId}`.
pub async fn owner_pet(Path((owner_id, pet_id)): Path<(String, String)>) -> View {
    View::new("owner-id-with-pets")
        .with("ownerId", owner_id)
        .with("petId", pet_id)
}
