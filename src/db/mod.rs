//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 연결 풀의 생성/종료와 저장소(repository) 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)는 요청마다 풀에서 연결 하나를 빌려
//! 이 모듈의 함수들에 `&mut SqliteConnection`으로 넘깁니다.
//!
//! 각 하위 모듈:
//! - `lists`: 이름으로 목록 조회, 목록 생성
//! - `items`: 목록 ID 범위 안에서 항목 조회/생성/삭제
//!
//! ## 연결 반환
//! `pool.acquire()`가 돌려주는 `PoolConnection`은 drop될 때 풀로 돌아갑니다.
//! `?`로 조기 반환하든 패닉이 나든 스코프를 벗어나는 순간 반환되므로
//! 별도의 release 호출이 필요 없습니다.

pub mod items;
pub mod lists;

pub use items::*;
pub use lists::*;

use crate::config::{Config, UNBOUNDED_ACQUIRE_WAIT};
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteQueryResult};
use sqlx::SqlitePool;
use std::str::FromStr;

/// 쓰기 작업(INSERT/DELETE)의 결과
///
/// 인프라 장애(연결 끊김, 풀 대기 시간 초과 등)는 여기에 포함되지 않고
/// `Err(AppError::Database)`로 전달됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// 문장이 실행됨. DELETE는 0행일 수도 있습니다.
    Applied { rows_affected: u64 },
    /// 유일성 제약 위반 (같은 이름의 목록이 이미 존재)
    Conflict,
    /// 외래키 제약 위반 (참조한 목록이 존재하지 않음)
    NotFound,
}

/// 설정값으로 연결 풀을 만들고 마이그레이션을 실행합니다.
///
/// 풀 크기는 여기서 고정되며, 모든 연결이 사용 중이면 `acquire()`는 실패하지 않고
/// 연결이 돌아올 때까지 비동기로 대기합니다 (다른 태스크는 막지 않음).
/// 대기 한도는 `DB_ACQUIRE_TIMEOUT_SECS`로 명시했을 때만 짧아집니다.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    // create_if_missing: 파일 DB가 없으면 새로 만듭니다.
    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

/// `./migrations` 폴더의 SQL 파일 중 아직 적용되지 않은 것을 순서대로 실행합니다.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// 풀을 닫습니다. 빌려간 연결이 모두 돌아올 때까지 기다린 뒤 반환합니다.
pub async fn close(pool: &SqlitePool) {
    pool.close().await;
    tracing::info!("Database pool closed");
}

/// INSERT/DELETE 실행 결과를 `WriteOutcome`으로 분류합니다.
///
/// 제약 조건 위반만 정상적인 결과로 바꾸고, 나머지 에러는 그대로 전파합니다.
pub(crate) fn write_outcome(
    result: Result<SqliteQueryResult, sqlx::Error>,
) -> Result<WriteOutcome, AppError> {
    let err = match result {
        Ok(done) => {
            return Ok(WriteOutcome::Applied {
                rows_affected: done.rows_affected(),
            })
        }
        Err(err) => err,
    };

    // as_database_error(): 드라이버가 돌려준 DB 에러일 때만 Some
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return Ok(WriteOutcome::Conflict);
        }
        if db_err.is_foreign_key_violation() {
            return Ok(WriteOutcome::NotFound);
        }
    }

    Err(AppError::Database(err))
}

/// 테스트용 in-memory 풀
///
/// `sqlite::memory:`는 연결마다 별도의 DB가 생기므로 연결을 하나로 제한하고,
/// 유휴 연결이 정리되어 DB가 사라지지 않도록 수명 제한을 끕니다.
#[cfg(test)]
pub(crate) async fn memory_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(UNBOUNDED_ACQUIRE_WAIT)
        .connect_with(options)
        .await
        .unwrap();

    migrate(&pool).await.unwrap();
    pool
}
