//! # 할 일 항목(TodoListItems) 쿼리 모듈
//!
//! 모든 함수는 목록 ID(`list_id`) 범위 안에서만 동작합니다.
//! 목록 존재 여부는 호출하는 핸들러가 먼저 확인합니다.
//!
//! ## 테이블 구조
//! - `TodoListItems`: (ID, list → TodoLists.ListID, text)

use super::{write_outcome, WriteOutcome};
use crate::error::AppError;
use crate::models::*;
use sqlx::SqliteConnection;

/// 목록에 속한 모든 항목을 조회합니다. 항목이 없으면 빈 Vec을 반환합니다.
///
/// `ID`와 `text`만 가져옵니다. 삽입 순서(ID 오름차순)로 정렬됩니다.
pub async fn list_items_for(
    conn: &mut SqliteConnection,
    list_id: i64,
) -> Result<Vec<TodoListItem>, AppError> {
    let items = sqlx::query_as::<_, TodoListItem>(
        "SELECT ID, text FROM TodoListItems WHERE list = ? ORDER BY ID",
    )
    .bind(list_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(items)
}

/// 목록에 새 항목을 추가합니다.
///
/// ## 반환값
/// - `Applied`: 추가 성공
/// - `NotFound`: `list_id`가 가리키는 목록이 없음 (조회와 추가 사이에 사라진 경우)
/// - `Err(...)`: 그 밖의 DB 에러
pub async fn create_item(
    conn: &mut SqliteConnection,
    list_id: i64,
    text: &str,
) -> Result<WriteOutcome, AppError> {
    let result = sqlx::query("INSERT INTO TodoListItems (list, text) VALUES (?, ?)")
        .bind(list_id)
        .bind(text)
        .execute(&mut *conn)
        .await;

    write_outcome(result)
}

/// 목록에서 내용이 정확히 일치하는 항목을 **모두** 삭제합니다.
///
/// 일치하는 행이 없어도 문장이 실행되면 `Applied { rows_affected: 0 }`입니다.
pub async fn delete_item(
    conn: &mut SqliteConnection,
    list_id: i64,
    text: &str,
) -> Result<WriteOutcome, AppError> {
    let result = sqlx::query("DELETE FROM TodoListItems WHERE list = ? AND text = ?")
        .bind(list_id)
        .bind(text)
        .execute(&mut *conn)
        .await;

    write_outcome(result)
}
