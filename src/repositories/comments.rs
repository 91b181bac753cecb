use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{error::AppError, models::comments::Comment};

#[derive(Debug)]
pub(crate) struct CreateCommentParams {
    pub text_body: String,
    pub user_name: String,
    pub board_id: i64,
    pub parent_comment_id: Option<i64>,
    pub is_comment_for_comment: bool,
    pub depth: i32,
    pub created_date: DateTime<Utc>,
    pub modified_date: DateTime<Utc>,
}

pub async fn create_comment(
    pool: &PgPool,
    params: CreateCommentParams,
) -> Result<Comment, AppError> {
    let comment = crate::log_query_fetch_one!(
        "comments.create_comment",
        sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comment (
                text_body,
                user_name,
                board_id,
                parent_comment_id,
                is_comment_for_comment,
                depth,
                created_date,
                modified_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(params.text_body)
        .bind(params.user_name)
        .bind(params.board_id)
        .bind(params.parent_comment_id)
        .bind(params.is_comment_for_comment)
        .bind(params.depth)
        .bind(params.created_date)
        .bind(params.modified_date)
        .fetch_one(pool)
    )?;

    Ok(comment)
}

pub async fn find_comment_by_id(
    pool: &PgPool,
    comment_id: i64,
) -> Result<Option<Comment>, AppError> {
    let comment = crate::log_query_fetch_optional!(
        "comments.find_comment_by_id",
        sqlx::query_as::<_, Comment>(
            r#"
            SELECT *
            FROM comment
            WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(pool)
    )?;

    Ok(comment)
}

/// Oldest first; the hierarchy assembly depends on this order for
/// sibling ordering at every level.
pub async fn list_comments_by_board(
    pool: &PgPool,
    board_id: i64,
) -> Result<Vec<Comment>, AppError> {
    let comments = crate::log_query_fetch_all!(
        "comments.list_comments_by_board",
        sqlx::query_as::<_, Comment>(
            r#"
            SELECT *
            FROM comment
            WHERE board_id = $1
            ORDER BY created_date ASC, id ASC
            "#,
        )
        .bind(board_id)
        .fetch_all(pool)
    )?;

    Ok(comments)
}

pub async fn update_comment_text(
    pool: &PgPool,
    comment_id: i64,
    text_body: String,
    modified_date: DateTime<Utc>,
) -> Result<Comment, AppError> {
    let comment = crate::log_query_fetch_one!(
        "comments.update_comment_text",
        sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comment
            SET text_body = $2, modified_date = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(comment_id)
        .bind(text_body)
        .bind(modified_date)
        .fetch_one(pool)
    )?;

    Ok(comment)
}

/// Descendant replies are removed by the ON DELETE CASCADE rule on
/// parent_comment_id.
pub async fn delete_comment(pool: &PgPool, comment_id: i64) -> Result<(), AppError> {
    crate::log_query_execute!(
        "comments.delete_comment",
        sqlx::query(
            r#"
            DELETE FROM comment
            WHERE id = $1
            "#,
        )
        .bind(comment_id)
        .execute(pool)
    )?;

    Ok(())
}

pub async fn count_comments_by_board(pool: &PgPool, board_id: i64) -> Result<i64, AppError> {
    let count = crate::log_query_fetch_one!(
        "comments.count_comments_by_board",
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM comment
            WHERE board_id = $1
            "#,
        )
        .bind(board_id)
        .fetch_one(pool)
    )?;

    Ok(count)
}
