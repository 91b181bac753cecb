use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;

use crate::{
    api::http::{boards as boards_http, comments as comments_http},
    app::middleware::security_headers,
    app::state::AppState,
    telemetry::request_logging_middleware,
};

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub fn build_router(state: AppState) -> Router {
    let allowed_origin = std::env::var("CORS_ALLOWED_ORIGIN")
        .ok()
        .and_then(|value| value.parse::<HeaderValue>().ok())
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN));

    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let board_routes = Router::new()
        .route("/board/create", post(boards_http::create_board_handle))
        .route("/board/", get(boards_http::list_boards_handle))
        .route(
            "/board/{board_id}",
            get(boards_http::get_board_handle)
                .put(boards_http::update_board_handle)
                .delete(boards_http::delete_board_handle),
        );

    let comment_routes = Router::new()
        .route("/api/comments", post(comments_http::create_comment_handle))
        .route(
            "/api/comments/board/{board_id}",
            get(comments_http::list_board_comments_handle),
        )
        .route(
            "/api/comments/board/{board_id}/count",
            get(comments_http::count_board_comments_handle),
        )
        .route(
            "/api/comments/{comment_id}",
            put(comments_http::update_comment_handle)
                .delete(comments_http::delete_comment_handle),
        )
        .route(
            "/api/comments/{comment_id}/reply",
            post(comments_http::create_reply_handle),
        );

    Router::new()
        .merge(board_routes)
        .merge(comment_routes)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .with_state(state)
}
