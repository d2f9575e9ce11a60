//! # 할 일 항목 라우트 핸들러
//!
//! 항목은 목록 이름(`name`)과 정확한 내용(`details`)으로 지정합니다. 항목 ID는 받지 않습니다.
//!
//! ## 엔드포인트
//! - `PUT    /api/todo/item?name=&details=` → 201 Created
//! - `DELETE /api/todo/item?name=&details=` → 200 OK
//!
//! 두 엔드포인트 모두 파라미터 누락이나 존재하지 않는 목록에는 400,
//! 저장 실패에는 500을 반환합니다.

use crate::{
    db::{self, WriteOutcome},
    error::AppError,
    models::*,
    routes::{non_empty, AppState},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use sqlx::SqliteConnection;

/// `name`, `details`가 모두 비어 있지 않은지 확인합니다.
fn required_params(query: TodoItemQuery) -> Result<(String, String), AppError> {
    match (non_empty(query.name), non_empty(query.details)) {
        (Some(name), Some(details)) => Ok((name, details)),
        _ => Err(AppError::BadRequest(
            "Query parameters 'name' and 'details' are required.".to_string(),
        )),
    }
}

fn unknown_list() -> AppError {
    AppError::BadRequest("Query parameter 'name' must be an existing todo list.".to_string())
}

/// 목록 이름을 ID로 바꿉니다. 목록이 없으면 400.
async fn resolve_list_id(conn: &mut SqliteConnection, name: &str) -> Result<i64, AppError> {
    db::find_list_by_name(conn, name)
        .await?
        .map(|list| list.list_id)
        .ok_or_else(|| {
            tracing::debug!("Rejected item for unknown todo list: {}", name);
            unknown_list()
        })
}

/// `PUT /api/todo/item?name=...&details=...`: 목록에 항목을 추가합니다.
///
/// 목록 조회와 INSERT는 별도의 왕복입니다. 그 사이 목록이 사라지면
/// 외래키 제약에 걸려 `NotFound`가 되고, 조회 실패와 같은 400으로 응답합니다.
pub async fn create_todo_item(
    State(state): State<AppState>,
    Query(query): Query<TodoItemQuery>,
) -> Result<StatusCode, AppError> {
    let (name, details) = required_params(query)?;

    let mut conn = state.pool.acquire().await?;
    let list_id = resolve_list_id(&mut conn, &name).await?;

    match db::create_item(&mut conn, list_id, &details).await? {
        WriteOutcome::Applied { .. } => Ok(StatusCode::CREATED),
        WriteOutcome::NotFound => Err(unknown_list()),
        WriteOutcome::Conflict => Err(AppError::Internal(format!(
            "Unexpected constraint failure adding item to '{}'",
            name
        ))),
    }
}

/// `DELETE /api/todo/item?name=...&details=...`: 내용이 일치하는 항목을 모두 삭제합니다.
///
/// 일치하는 항목이 없어도 삭제 문장이 실행되면 200 OK입니다.
pub async fn delete_todo_item(
    State(state): State<AppState>,
    Query(query): Query<TodoItemQuery>,
) -> Result<StatusCode, AppError> {
    let (name, details) = required_params(query)?;

    let mut conn = state.pool.acquire().await?;
    let list_id = resolve_list_id(&mut conn, &name).await?;

    match db::delete_item(&mut conn, list_id, &details).await? {
        WriteOutcome::Applied { rows_affected } => {
            tracing::debug!("Deleted {} item(s) from todo list {}", rows_affected, name);
            Ok(StatusCode::OK)
        }
        outcome => Err(AppError::Internal(format!(
            "Unexpected outcome deleting item from '{}': {:?}",
            name, outcome
        ))),
    }
}

#[cfg(test)]
mod tests {
    use crate::routes::testing::{app, json, send};
    use axum::http::{Method, StatusCode};

    #[tokio::test]
    async fn missing_params_are_rejected_before_touching_the_database() {
        let (app, pool) = app().await;
        pool.close().await;

        for (method, uri) in [
            (Method::PUT, "/api/todo/item?details=Milk"),
            (Method::PUT, "/api/todo/item?name=Groceries"),
            (Method::PUT, "/api/todo/item?name=&details=Milk"),
            (Method::DELETE, "/api/todo/item?details=Milk"),
            (Method::DELETE, "/api/todo/item?name=Groceries&details="),
        ] {
            let (status, body) = send(&app, method, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            assert_eq!(json(&body)["error"]["code"], "bad_request");
        }
    }

    #[tokio::test]
    async fn unknown_list_is_a_bad_request() {
        let (app, _pool) = app().await;

        let (status, body) = send(&app, Method::PUT, "/api/todo/item?name=Nope&details=Milk").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json(&body)["error"]["message"],
            "Query parameter 'name' must be an existing todo list."
        );

        let (status, _) = send(&app, Method::DELETE, "/api/todo/item?name=Nope&details=Milk").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn deleting_an_absent_item_is_still_ok() {
        let (app, _pool) = app().await;
        send(&app, Method::PUT, "/api/todo?name=Groceries&description=x").await;

        let (status, body) =
            send(&app, Method::DELETE, "/api/todo/item?name=Groceries&details=Caviar").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_all_items_with_that_text() {
        let (app, _pool) = app().await;
        send(&app, Method::PUT, "/api/todo?name=Groceries&description=x").await;
        send(&app, Method::PUT, "/api/todo/item?name=Groceries&details=Milk").await;
        send(&app, Method::PUT, "/api/todo/item?name=Groceries&details=Milk").await;
        send(&app, Method::PUT, "/api/todo/item?name=Groceries&details=Bread").await;

        let (status, _) = send(&app, Method::DELETE, "/api/todo/item?name=Groceries&details=Milk").await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/api/todo?name=Groceries").await;
        let items = json(&body)["items"].as_array().cloned().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["text"], "Bread");
    }

    #[tokio::test]
    async fn item_text_keeps_reserved_characters() {
        let (app, _pool) = app().await;
        send(&app, Method::PUT, "/api/todo?name=Mixed&description=x").await;

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/todo/item?name=Mixed&details=Tea%20%26%20%22biscuits%22%5Cn",
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = send(&app, Method::GET, "/api/todo?name=Mixed").await;
        assert_eq!(json(&body)["items"][0]["text"], "Tea & \"biscuits\"\\n");
    }
}
