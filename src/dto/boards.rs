use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payload for board create and update.
///
/// String fields default to empty when absent so the validation layer
/// reports them as blank instead of the deserializer rejecting the body.
#[derive(Debug, Deserialize)]
pub struct BoardRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

#[derive(Debug, Deserialize)]
pub struct BoardPageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
    pub create_at: NaiveDate,
    pub updated_at: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPageResponse {
    pub content: Vec<BoardResponse>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

#[derive(Debug, Serialize)]
pub struct BoardActionMessage {
    pub message: String,
}
