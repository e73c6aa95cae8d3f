//! courier-core
//!
//! content モジュールと space モジュールをプロセス内イベントでつなぐためのコア部品。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, content, space, events, errors）
//! - **ports**: 抽象化レイヤー（Clock, IdGenerator, ContentCreator, SpaceCreator）
//! - **typed**: 型付き Event API（Event trait, Handler trait, TypedRegistry）
//! - **bus**: プロセス内 pub/sub（EventBus）
//! - **content**: ContentService（content 作成 → ContentCreated 発行）
//! - **space**: SpaceHandler / SpaceService（ContentCreated → space 作成）
//! - **app**: 起動時のワイヤリング（AppBuilder）
//!
//! # フロー
//! ```text
//! entry point -> ContentService -> EventBus -> SpaceHandler (別タスク) -> SpaceService
//! ```

pub mod domain;
pub mod ports;
pub mod typed;
pub mod bus;
pub mod content;
pub mod space;
pub mod app;

pub use self::bus::EventBus;
pub use self::domain::CourierError;
