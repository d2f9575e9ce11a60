//! # 할 일 목록(TodoLists) 쿼리 모듈
//!
//! 이름으로 목록을 찾고, 새 목록을 만드는 함수들입니다.
//! 모든 함수는 핸들러가 풀에서 빌린 연결(`&mut SqliteConnection`)을 받습니다.
//!
//! ## 테이블 구조
//! - `TodoLists`: (ListID, name UNIQUE, description)

use super::{write_outcome, WriteOutcome};
use crate::error::AppError;
use crate::models::*;
use sqlx::SqliteConnection;

/// 이름이 정확히 일치하는 목록을 조회합니다 (대소문자 구분).
///
/// 이름은 유일하므로 결과는 많아야 한 행입니다.
/// 일치하는 행이 없으면 에러가 아니라 `Ok(None)`을 반환합니다.
pub async fn find_list_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<TodoListInfo>, AppError> {
    let list = sqlx::query_as::<_, TodoListInfo>(
        "SELECT ListID, name, description FROM TodoLists WHERE name = ?",
    )
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(list)
}

/// 새 목록을 추가합니다.
///
/// ## 반환값
/// - `Applied`: 생성 성공
/// - `Conflict`: 같은 이름의 목록이 이미 있음. 기존 행은 변경되지 않습니다.
/// - `Err(...)`: 그 밖의 DB 에러
///
/// 동시에 같은 이름으로 생성 요청이 들어와도 UNIQUE 제약이 두 번째 INSERT를 거부하므로
/// 별도의 잠금은 사용하지 않습니다.
pub async fn create_list(
    conn: &mut SqliteConnection,
    name: &str,
    description: &str,
) -> Result<WriteOutcome, AppError> {
    let result = sqlx::query("INSERT INTO TodoLists (name, description) VALUES (?, ?)")
        .bind(name)
        .bind(description)
        .execute(&mut *conn)
        .await;

    write_outcome(result)
}
