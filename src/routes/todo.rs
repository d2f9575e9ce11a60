//! # 할 일 목록 라우트 핸들러
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 핸들러 | 성공 | 실패 |
//! |--------|------|--------|------|------|
//! | GET | /api/todo?name= | `get_todo_list` | 200 + JSON | 400 (name 누락), 204 (없음) |
//! | PUT | /api/todo?name=&description= | `create_todo_list` | 201 | 400, 409 (이름 충돌) |
//! | DELETE | /api/todo | `delete_todo_list` | 없음 | 501 (미구현) |

use crate::{
    db::{self, WriteOutcome},
    error::AppError,
    models::*,
    routes::{non_empty, pretty_json, AppState},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// `GET /api/todo?name=...`: 이름으로 목록을 찾아 항목과 함께 반환합니다.
///
/// - `name` 파라미터 자체가 없으면 400 (DB에 접근하지 않음)
/// - 해당 이름의 목록이 없으면 204 No Content (본문 없음)
/// - 찾으면 200 + 들여쓰기된 JSON
pub async fn get_todo_list(
    State(state): State<AppState>,
    Query(query): Query<TodoListQuery>,
) -> Result<Response, AppError> {
    let Some(name) = query.name else {
        return Err(AppError::BadRequest(
            "Query parameter 'name' is required.".to_string(),
        ));
    };

    let mut conn = state.pool.acquire().await?;

    let Some(info) = db::find_list_by_name(&mut conn, &name).await? else {
        tracing::debug!("Todo list not found: {}", name);
        return Ok(StatusCode::NO_CONTENT.into_response());
    };
    let items = db::list_items_for(&mut conn, info.list_id).await?;
    drop(conn);

    pretty_json(&TodoList::new(info, items))
}

/// `PUT /api/todo?name=...&description=...`: 새 목록을 만듭니다.
///
/// 두 파라미터 모두 비어 있지 않아야 합니다. 같은 이름이 이미 있으면 409 Conflict.
pub async fn create_todo_list(
    State(state): State<AppState>,
    Query(query): Query<TodoListQuery>,
) -> Result<StatusCode, AppError> {
    let (Some(name), Some(description)) = (non_empty(query.name), non_empty(query.description))
    else {
        return Err(AppError::BadRequest(
            "Query parameters 'name' and 'description' are required.".to_string(),
        ));
    };

    let mut conn = state.pool.acquire().await?;

    match db::create_list(&mut conn, &name, &description).await? {
        WriteOutcome::Applied { .. } => {
            tracing::info!("Created todo list: {}", name);
            Ok(StatusCode::CREATED)
        }
        WriteOutcome::Conflict => {
            tracing::info!("Todo list already exists: {}", name);
            Err(AppError::Conflict(
                "Todo list already exists by that name.".to_string(),
            ))
        }
        // 목록 INSERT에는 외래키가 없으므로 정상 경로에서는 나오지 않습니다.
        WriteOutcome::NotFound => Err(AppError::Internal(format!(
            "Unexpected foreign key failure creating todo list '{}'",
            name
        ))),
    }
}

/// `DELETE /api/todo`: 아직 구현되지 않은 기능입니다.
///
/// 입력과 관계없이 항상 501 Not Implemented를 반환하며, DB 연결도 빌리지 않습니다.
pub async fn delete_todo_list() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}
