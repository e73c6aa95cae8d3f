//! Typed - 型付き Event API
//!
//! event_type の typo を型で排除し、Handler との対応付けを静的に保証します。
//!
//! # 二層構造
//! - **表層（Typed）**: `Event` trait, `Handler<E>` trait - 型安全
//! - **内部（Dyn）**: `DynHandler` trait - object-safe, type erasure

pub mod event;
pub mod handler;
pub mod registry;

// 主要な trait/型 を再エクスポート
pub use self::event::Event;
pub use self::handler::{DynHandler, Handler, TypedHandler};
pub use self::registry::TypedRegistry;
