//! Content - content モジュール
//!
//! 作成依頼を受けて Content を作り、ContentCreated を EventBus に発行します。

pub mod service;

pub use self::service::ContentService;
