//! courier-server
//!
//! courier-core を HTTP に公開するエントリポイント。
//!
//! - **config**: figment による設定読み込み（デフォルト → TOML → 環境変数）
//! - **telemetry**: tracing-subscriber の初期化
//! - **routes**: axum Router（`POST /content`, `GET /health`）

pub mod config;
pub mod routes;
pub mod telemetry;
