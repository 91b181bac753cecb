use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload for comment create, reply and update.
///
/// The same shape serves all three; the reply endpoint fills in
/// `parent_comment_id` from the path before delegating to create.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    #[serde(default)]
    pub text_body: String,
    #[serde(default)]
    pub user: String,
    pub board_id: Option<i64>,
    pub parent_comment_id: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: i64,
    pub text_body: String,
    pub user: String,
    pub board_id: i64,
    pub parent_comment_id: Option<i64>,
    pub is_comment_for_comment: bool,
    pub depth: i32,
    pub order_number: Option<i64>,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
    // Populated only by the hierarchical board listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<CommentResponse>>,
}

#[derive(Debug, Serialize)]
pub struct CommentActionMessage {
    pub message: String,
}
