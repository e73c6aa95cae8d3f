//! Errors - コアのエラー型

use thiserror::Error;

/// CourierError はコア部品のエラー
///
/// 同期パス（entry point → ContentService → EventBus::publish）でのみ呼び出し元に返ります。
/// 非同期に実行される購読者のエラーは EventBus が握りつぶします。
#[derive(Debug, Error)]
pub enum CourierError {
    #[error("no tokio runtime available to dispatch events")]
    NoRuntime,

    #[error("failed to encode event '{event_type}': {source}")]
    Encode {
        event_type: &'static str,
        source: serde_json::Error,
    },

    #[error("failed to decode event '{event_type}': {source}")]
    Decode {
        event_type: &'static str,
        source: serde_json::Error,
    },

    #[error("subscriber registry lock poisoned")]
    RegistryPoisoned,

    #[error("{0}")]
    Handler(String),
}
