//! Space - space モジュール
//!
//! ContentCreated を購読し、対応する Space を作成します。
//! content モジュールからは EventBus 越しにしか呼ばれません。

pub mod handler;
pub mod service;

pub use self::handler::SpaceHandler;
pub use self::service::SpaceService;
