//! The two item operations: list and create.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::store::{Item, ItemStore};

/// Upper bound on a stored name. The column itself is unbounded text;
/// this keeps arbitrary payloads out of the table.
const MAX_NAME_CHARS: usize = 255;

/// Routes mounted under the `/api` prefix.
pub fn router() -> Router<ItemStore> {
    Router::new().route("/items", get(list_items).post(create_item))
}

/// Request body for item creation.
#[derive(Debug, Deserialize)]
pub struct CreateItem {
    pub name: String,
}

impl CreateItem {
    /// Validate and normalize the submitted name.
    fn validated_name(&self) -> Result<&str, ApiError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ApiError::Validation("name must not be empty".to_string()));
        }
        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ApiError::Validation(format!(
                "name must be at most {} characters",
                MAX_NAME_CHARS
            )));
        }
        Ok(name)
    }
}

/// `GET /api/items` — every stored item as a JSON array.
async fn list_items(State(store): State<ItemStore>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = store.list().await?;
    tracing::debug!(count = items.len(), "Listed items");
    Ok(Json(items))
}

/// `POST /api/items` — persist one item, respond 201 with the stored row.
async fn create_item(
    State(store): State<ItemStore>,
    Json(body): Json<CreateItem>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let name = body.validated_name()?;
    let item = store.create(name).await?;
    tracing::debug!(id = item.id, "Item created");
    Ok((StatusCode::CREATED, Json(item)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(name: &str) -> CreateItem {
        CreateItem {
            name: name.to_string(),
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(body("  Milk \n").validated_name().unwrap(), "Milk");
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            body("").validated_name(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn rejects_whitespace_only_name() {
        assert!(matches!(
            body("   \t ").validated_name(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn rejects_oversized_name() {
        let long = "x".repeat(MAX_NAME_CHARS + 1);
        assert!(matches!(
            body(&long).validated_name(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn accepts_name_at_the_bound() {
        let exact = "x".repeat(MAX_NAME_CHARS);
        assert_eq!(body(&exact).validated_name().unwrap(), exact);
    }
}
