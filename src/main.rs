//! # 할 일 목록 API 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정 로딩
//! 4. SQLite 연결 풀 생성 + 마이그레이션
//! 5. API 라우터 설정
//! 6. HTTP 서버 시작 (Ctrl+C / SIGTERM 시 정상 종료)
//! 7. 연결 풀 종료

mod config;
mod db;
mod error;
mod models;
mod routes;

use anyhow::Result;
use config::Config;
use routes::AppState;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_lists=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    // DATABASE_URL이 없으면 여기서 에러로 종료합니다.
    let config = Config::from_env()?;
    tracing::info!("Starting todo list server on {}:{}", config.host, config.port);

    // ── 4단계: 연결 풀 생성 ──
    // 풀은 프로세스 전체에서 한 번만 만들고, AppState를 통해 핸들러에 주입합니다.
    tracing::info!(
        "Opening database pool ({} connections) and running migrations...",
        config.max_connections
    );
    let pool = db::connect(&config).await?;

    // ── 5단계: 라우터 설정 ──
    let app = routes::router(AppState { pool: pool.clone() });

    // ── 6단계: 서버 시작 ──
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // ── 7단계: 연결 풀 종료 ──
    db::close(&pool).await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// Ctrl+C 또는 SIGTERM을 받을 때까지 기다립니다.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::warn!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::warn!("Received SIGTERM, shutting down..."),
    }
}
