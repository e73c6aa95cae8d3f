//! App - アプリケーション層
//!
//! 起動時に全コンポーネントを明示的に組み立てます（DI コンテナは使わない）。
//!
//! # 主要コンポーネント
//! - **AppBuilder**: EventBus / IdGenerator / SpaceCreator のワイヤリングと起動時検証
//! - **App**: 組み立て済みのコンポーネント一式

pub mod builder;

// 主要な型を再エクスポート
pub use self::builder::{App, AppBuilder, BuildError};
