//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들과 라우터를 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `todo`: 목록 조회/생성/삭제 (`/api/todo`)
//! - `items`: 항목 생성/삭제 (`/api/todo/item`)
//! - `health`: 서버 상태 확인 (`/api/health`)
//!
//! ## 요청 처리 순서
//! 검증(Validate) → 연결 획득(Acquire) → 실행(Execute) → 응답(Respond)
//!
//! 필수 파라미터 검사는 연결을 빌리기 전에 끝냅니다. 연결은 핸들러 스코프를 벗어날 때
//! 자동으로 풀에 반환됩니다 (`PoolConnection`의 Drop).

pub mod health;
pub mod items;
pub mod todo;

pub use health::*;
pub use items::*;
pub use todo::*;

use crate::error::AppError;
use axum::{
    http::header,
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// 모든 핸들러가 공유하는 애플리케이션 상태
///
/// `SqlitePool`은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
/// 풀은 프로세스 시작 시 한 번 만들어지고 요청마다 새로 만들지 않습니다.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// 전체 라우터를 구성합니다.
///
/// 경로마다 등록되지 않은 HTTP 메서드는 Axum이 405 Method Not Allowed로 응답합니다.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/todo",
            get(get_todo_list)
                .put(create_todo_list)
                .delete(delete_todo_list),
        )
        .route("/todo/item", put(create_todo_item).delete(delete_todo_item))
        .route("/health", get(health_check))
        .with_state(state);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// 값이 없거나 빈 문자열이면 `None`
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// 4칸 들여쓰기를 적용한 JSON 응답(200 OK)을 만듭니다.
pub(crate) fn pretty_json<T: Serialize>(value: &T) -> Result<Response, AppError> {
    let mut body = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .map_err(|e| AppError::Internal(format!("Failed to serialize response: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
