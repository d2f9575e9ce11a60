//! # 할 일 목록 모델 정의
//!
//! ## 구조체 역할
//! - `TodoListInfo`: `TodoLists` 테이블 한 행 (목록 자체의 정보)
//! - `TodoListItem`: `TodoListItems` 테이블에서 응답에 필요한 열만 뽑은 항목
//! - `TodoList`: 목록 정보 + 항목들. `GET /api/todo`의 응답 본문
//! - `TodoListQuery`, `TodoItemQuery`: 쿼리 파라미터. 누락 여부를 `Option`으로 표현
//!
//! JSON 필드 이름(`ListID`, `ID` 등)은 클라이언트와 약속된 형식 그대로 유지합니다.

use serde::{Deserialize, Serialize};

/// 할 일 목록 정보: DB의 `TodoLists` 테이블 한 행(row)에 대응합니다.
///
/// `#[sqlx(rename)]`은 SQL 열 이름, `#[serde(rename)]`은 JSON 필드 이름을 지정합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TodoListInfo {
    /// 저장소가 생성 시 부여하는 식별자. 이후 바뀌지 않습니다.
    #[serde(rename = "ListID")]
    #[sqlx(rename = "ListID")]
    pub list_id: i64,
    /// 목록 이름. 전역에서 유일하며 대소문자를 구분합니다.
    pub name: String,
    pub description: String,
}

/// 목록에 속한 할 일 항목. `ID`와 `text`만 노출합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TodoListItem {
    #[serde(rename = "ID")]
    #[sqlx(rename = "ID")]
    pub id: i64,
    pub text: String,
}

/// 항목이 첨부된 할 일 목록
///
/// `#[serde(flatten)]`: `info`의 필드를 같은 JSON 객체에 펼쳐 넣습니다.
/// 결과: `{ "ListID": 1, "name": "...", "description": "...", "items": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoList {
    #[serde(flatten)]
    pub info: TodoListInfo,
    pub items: Vec<TodoListItem>,
}

impl TodoList {
    pub fn new(info: TodoListInfo, items: Vec<TodoListItem>) -> Self {
        Self { info, items }
    }
}

/// `/api/todo` 쿼리 파라미터: `?name=...&description=...`
///
/// 누락된 파라미터는 `None`이 됩니다. 필수 여부 검사는 핸들러가 DB 접근 전에 수행합니다.
#[derive(Debug, Default, Deserialize)]
pub struct TodoListQuery {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// `/api/todo/item` 쿼리 파라미터: `?name=<목록 이름>&details=<항목 내용>`
#[derive(Debug, Default, Deserialize)]
pub struct TodoItemQuery {
    /// 항목이 속한 목록의 이름
    pub name: Option<String>,
    /// 항목 내용 (`TodoListItems.text`)
    pub details: Option<String>,
}
