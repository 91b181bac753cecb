use chrono::NaiveDate;
use sqlx::PgPool;

use crate::{error::AppError, models::boards::Board};

#[derive(Debug)]
pub(crate) struct CreateBoardParams {
    pub title: String,
    pub author: String,
    pub content: String,
    pub create_at: NaiveDate,
}

#[derive(Debug)]
pub(crate) struct UpdateBoardParams {
    pub title: String,
    pub author: String,
    pub content: String,
    pub updated_at: NaiveDate,
}

pub async fn create_board(pool: &PgPool, params: CreateBoardParams) -> Result<Board, AppError> {
    let board = crate::log_query_fetch_one!(
        "boards.create_board",
        sqlx::query_as::<_, Board>(
            r#"
            INSERT INTO board (title, author, content, create_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(params.title)
        .bind(params.author)
        .bind(params.content)
        .bind(params.create_at)
        .fetch_one(pool)
    )?;

    Ok(board)
}

pub async fn find_board_by_id(pool: &PgPool, board_id: i64) -> Result<Option<Board>, AppError> {
    let board = crate::log_query_fetch_optional!(
        "boards.find_board_by_id",
        sqlx::query_as::<_, Board>(
            r#"
            SELECT id, title, author, content, create_at, updated_at
            FROM board
            WHERE id = $1
            "#,
        )
        .bind(board_id)
        .fetch_optional(pool)
    )?;

    Ok(board)
}

pub async fn update_board(
    pool: &PgPool,
    board_id: i64,
    params: UpdateBoardParams,
) -> Result<Board, AppError> {
    let board = crate::log_query_fetch_one!(
        "boards.update_board",
        sqlx::query_as::<_, Board>(
            r#"
            UPDATE board
            SET title = $2, author = $3, content = $4, updated_at = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(board_id)
        .bind(params.title)
        .bind(params.author)
        .bind(params.content)
        .bind(params.updated_at)
        .fetch_one(pool)
    )?;

    Ok(board)
}

pub async fn delete_board(pool: &PgPool, board_id: i64) -> Result<(), AppError> {
    crate::log_query_execute!(
        "boards.delete_board",
        sqlx::query(
            r#"
            DELETE FROM board
            WHERE id = $1
            "#,
        )
        .bind(board_id)
        .execute(pool)
    )?;

    Ok(())
}

/// Newest boards first; id breaks ties between boards created the same day.
pub async fn list_boards_paged(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Board>, AppError> {
    let boards = crate::log_query_fetch_all!(
        "boards.list_boards_paged",
        sqlx::query_as::<_, Board>(
            r#"
            SELECT id, title, author, content, create_at, updated_at
            FROM board
            ORDER BY create_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
    )?;

    Ok(boards)
}

pub async fn count_boards(pool: &PgPool) -> Result<i64, AppError> {
    let count = crate::log_query_fetch_one!(
        "boards.count_boards",
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM board
            "#,
        )
        .fetch_one(pool)
    )?;

    Ok(count)
}
