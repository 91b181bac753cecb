use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    app::state::AppState,
    dto::boards::{BoardActionMessage, BoardPageQuery, BoardPageResponse, BoardRequest, BoardResponse},
    error::AppError,
    usecases::boards::BoardService,
};

pub async fn get_board_handle(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
) -> Result<Json<BoardResponse>, AppError> {
    let response = BoardService::get_board(&state.db, board_id).await?;
    Ok(Json(response))
}

pub async fn create_board_handle(
    State(state): State<AppState>,
    Json(req): Json<BoardRequest>,
) -> Result<(StatusCode, Json<BoardResponse>), AppError> {
    let response = BoardService::create_board(&state.db, req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn update_board_handle(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
    Json(req): Json<BoardRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    let response = BoardService::update_board(&state.db, board_id, req).await?;
    Ok(Json(response))
}

pub async fn delete_board_handle(
    State(state): State<AppState>,
    Path(board_id): Path<i64>,
) -> Result<Json<BoardActionMessage>, AppError> {
    BoardService::delete_board(&state.db, board_id).await?;
    Ok(Json(BoardActionMessage {
        message: "Board deleted successfully".to_string(),
    }))
}

pub async fn list_boards_handle(
    State(state): State<AppState>,
    Query(query): Query<BoardPageQuery>,
) -> Result<Json<BoardPageResponse>, AppError> {
    let response = BoardService::list_boards(&state.db, query.page, query.size).await?;
    Ok(Json(response))
}
