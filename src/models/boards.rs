use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Board model mapped to the board table.
///
/// Dates are date-granular: `create_at` is set once at creation and
/// `updated_at` stays NULL until the first update.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Board {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub content: String,
    pub create_at: NaiveDate,
    pub updated_at: Option<NaiveDate>,
}
