use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    app::state::AppState,
    dto::comments::{CommentActionMessage, CommentRequest, CommentResponse},
    error::AppError,
    usecases::comments::CommentService,
};

pub async fn create_comment_handle(
    State(state): State<AppState>,
    Json(req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let response = CommentService::create_comment(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_board_comments_handle(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let response = CommentService::list_board_comments(&state.db, board_id).await?;
    Ok(Json(response))
}

pub async fn update_comment_handle(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, AppError> {
    let response = CommentService::update_comment(&state.db, comment_id, req).await?;
    Ok(Json(response))
}

pub async fn delete_comment_handle(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
) -> Result<Json<CommentActionMessage>, AppError> {
    CommentService::delete_comment(&state.db, comment_id).await?;
    Ok(Json(CommentActionMessage {
        message: "Comment deleted successfully".to_string(),
    }))
}

pub async fn count_board_comments_handle(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
) -> Result<Json<i64>, AppError> {
    let count = CommentService::count_board_comments(&state.db, board_id).await?;
    Ok(Json(count))
}

/// Reply creation reuses the comment payload; the parent id comes from
/// the path and overrides whatever the body carries.
pub async fn create_reply_handle(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
    Json(mut req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    req.parent_comment_id = Some(comment_id);
    let response = CommentService::create_comment(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
