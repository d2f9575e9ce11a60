//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `todo`: 할 일 목록(TodoList)과 항목(TodoListItem), 요청 쿼리 파라미터

pub mod todo;

pub use todo::*;
