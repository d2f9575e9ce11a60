//! # 헬스체크(Health Check) 핸들러
//!
//! - `GET /api/health` → `{ "status": "ok" }`
//!
//! 데이터베이스에 접근하지 않으므로 프로세스가 요청을 받을 수 있는지만 알려줍니다.

use axum::Json;
use serde_json::{json, Value};

/// `GET /api/health`: 서버 상태를 확인합니다.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}
