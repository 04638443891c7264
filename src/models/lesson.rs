use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A catalog row as the store holds it. Only `id` and `order_index` carry
/// meaning for the service; everything else is passed through untouched,
/// including columns this struct does not name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lesson {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<i32>,
    pub order_index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub content_json: Option<JsonValue>,
    // Store columns without a named field, e.g. `created_at`.
    #[serde(flatten)]
    #[sqlx(skip)]
    pub extra: HashMap<String, JsonValue>,
}
