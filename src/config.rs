//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 연결 문자열 (필수)
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호
//! - `DB_MAX_CONNECTIONS`: 연결 풀의 고정 크기
//! - `DB_ACQUIRE_TIMEOUT_SECS`: 풀에서 연결을 기다리는 최대 시간(초). 지정하지 않으면 사실상 무제한

use std::env;
use std::time::Duration;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 연결 획득 대기 기본값 (1년)
///
/// 풀이 모두 사용 중이면 요청은 실패하지 않고 연결이 돌아올 때까지 기다립니다.
/// sqlx가 `Instant::now()`에 이 값을 더하므로 `Duration::MAX`는 쓸 수 없습니다.
pub const UNBOUNDED_ACQUIRE_WAIT: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 한 번 읽어온 후 변경되지 않습니다.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 연결 문자열 (예: "sqlite:data/todo.db")
    pub database_url: String,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 8000)
    pub port: u16,
    /// 연결 풀 크기. 프로세스 시작 시 고정됩니다 (기본값: 5)
    pub max_connections: u32,
    /// 연결 획득 대기 한도 (기본값: `UNBOUNDED_ACQUIRE_WAIT`)
    pub acquire_timeout: Duration,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// # 에러
    /// `DATABASE_URL`이 없으면 `VarError`를 반환합니다.
    /// 나머지 항목은 없거나 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_env() -> Result<Self, env::VarError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// 주어진 조회 함수(`lookup`)로 설정값을 읽습니다.
    /// `from_env()`는 `std::env::var`를 넘겨 이 함수를 호출합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, env::VarError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")?, // 필수: 없으면 에러
            host: lookup("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: lookup("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            // 크기 0인 풀은 어떤 요청도 처리할 수 없으므로 기본값으로 대체합니다.
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &u32| n > 0)
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            acquire_timeout: lookup("DB_ACQUIRE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(|secs: u64| Duration::from_secs(secs).min(UNBOUNDED_ACQUIRE_WAIT))
                .unwrap_or(UNBOUNDED_ACQUIRE_WAIT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(
        vars: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, env::VarError> + 'a {
        move |key: &str| {
            vars.get(key)
                .map(|v| v.to_string())
                .ok_or(env::VarError::NotPresent)
        }
    }

    #[test]
    fn database_url_is_required() {
        let vars = HashMap::new();
        let result = Config::from_lookup(lookup_from(&vars));
        assert!(matches!(result, Err(env::VarError::NotPresent)));
    }

    #[test]
    fn defaults_apply_when_optional_values_are_absent() {
        let vars = HashMap::from([("DATABASE_URL", "sqlite::memory:")]);
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, UNBOUNDED_ACQUIRE_WAIT);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let vars = HashMap::from([
            ("DATABASE_URL", "sqlite:data/todo.db"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9090"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "3"),
        ]);
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.max_connections, 12);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
    }

    #[test]
    fn unparsable_numbers_fall_back_to_defaults() {
        let vars = HashMap::from([
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "not-a-port"),
            ("DB_MAX_CONNECTIONS", "0"),
            ("DB_ACQUIRE_TIMEOUT_SECS", "-1"),
        ]);
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, UNBOUNDED_ACQUIRE_WAIT);
    }
}
