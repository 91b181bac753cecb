use chrono::Utc;
use sqlx::PgPool;

use crate::{
    dto::boards::{BoardPageResponse, BoardRequest, BoardResponse},
    error::AppError,
    models::boards::Board,
    repositories::boards as board_repo,
    repositories::boards::{CreateBoardParams, UpdateBoardParams},
    telemetry::BusinessEvent,
    usecases::validation,
};

pub struct BoardService;

pub const DEFAULT_PAGE: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

impl BoardService {
    pub async fn create_board(
        pool: &PgPool,
        req: BoardRequest,
    ) -> Result<BoardResponse, AppError> {
        validation::validate_board_request(&req)?;

        let board = board_repo::create_board(
            pool,
            CreateBoardParams {
                title: req.title,
                author: req.author,
                content: req.content,
                create_at: Utc::now().date_naive(),
            },
        )
        .await?;

        BusinessEvent::BoardCreated { board_id: board.id }.log();

        Ok(map_board_response(board))
    }

    pub async fn get_board(pool: &PgPool, board_id: i64) -> Result<BoardResponse, AppError> {
        validation::validate_id("Board id", board_id)?;

        let board = board_repo::find_board_by_id(pool, board_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Board not found: {board_id}")))?;

        Ok(map_board_response(board))
    }

    pub async fn update_board(
        pool: &PgPool,
        board_id: i64,
        req: BoardRequest,
    ) -> Result<BoardResponse, AppError> {
        validation::validate_id("Board id", board_id)?;
        validation::validate_board_request(&req)?;

        board_repo::find_board_by_id(pool, board_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Board not found: {board_id}")))?;

        let board = board_repo::update_board(
            pool,
            board_id,
            UpdateBoardParams {
                title: req.title,
                author: req.author,
                content: req.content,
                updated_at: Utc::now().date_naive(),
            },
        )
        .await?;

        BusinessEvent::BoardUpdated { board_id }.log();

        Ok(map_board_response(board))
    }

    pub async fn delete_board(pool: &PgPool, board_id: i64) -> Result<bool, AppError> {
        validation::validate_id("Board id", board_id)?;

        board_repo::find_board_by_id(pool, board_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Board not found: {board_id}")))?;

        board_repo::delete_board(pool, board_id).await?;

        BusinessEvent::BoardDeleted { board_id }.log();

        Ok(true)
    }

    pub async fn list_boards(
        pool: &PgPool,
        page: Option<i64>,
        size: Option<i64>,
    ) -> Result<BoardPageResponse, AppError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE);
        validation::validate_paging(page, size)?;

        // page * size can exceed i64 for absurd page numbers; reject
        // instead of overflowing into a negative offset.
        let offset = page
            .checked_mul(size)
            .ok_or_else(|| AppError::BadRequest("Page number is too large".to_string()))?;

        let boards = board_repo::list_boards_paged(pool, size, offset).await?;
        let total_elements = board_repo::count_boards(pool).await?;

        Ok(BoardPageResponse {
            content: boards.into_iter().map(map_board_response).collect(),
            page,
            size,
            total_elements,
            total_pages: total_pages(total_elements, size),
        })
    }
}

fn map_board_response(board: Board) -> BoardResponse {
    BoardResponse {
        id: board.id,
        title: board.title,
        author: board.author,
        content: board.content,
        create_at: board.create_at,
        updated_at: board.updated_at,
    }
}

fn total_pages(total_elements: i64, size: i64) -> i64 {
    if total_elements == 0 {
        return 0;
    }
    (total_elements + size - 1) / size
}
