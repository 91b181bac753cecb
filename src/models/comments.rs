use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Comment model mapped to the comment table.
///
/// `parent_comment_id` is NULL for top-level comments. `depth` and
/// `is_comment_for_comment` are fixed at creation and never change.
/// `order_number` is declared for wire compatibility but no operation
/// populates it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: i64,
    pub text_body: String,
    pub user_name: String,
    pub board_id: i64,
    pub parent_comment_id: Option<i64>,
    pub is_comment_for_comment: bool,
    pub depth: i32,
    pub order_number: Option<i64>,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}
