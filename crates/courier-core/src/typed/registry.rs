//! TypedRegistry - 購読者の登録と管理
//!
//! - HashMap での型消去された trait object の管理
//! - Generic methods での登録と型安全性
//! - Arc による共有所有権

use super::event::Event;
use super::handler::{DynHandler, Handler, TypedHandler};
use std::collections::HashMap;
use std::sync::Arc;

/// TypedRegistry は event_type ごとに購読者のリストを持つ
///
/// # 使用例
/// ```ignore
/// let mut registry = TypedRegistry::new();
/// registry.register::<ContentCreated, _>(space_handler);
///
/// let handlers = registry.get(ContentCreated::TYPE);
/// ```
///
/// 同じ event_type に何度でも登録できます（pub/sub なので 1:N）。
/// 呼び出し順は保証しません。
#[derive(Default)]
pub struct TypedRegistry {
    handlers: HashMap<&'static str, Vec<Arc<dyn DynHandler>>>,
}

impl TypedRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register<E: Event, H: Handler<E> + 'static>(&mut self, handler: H) {
        let typed_handler = TypedHandler::<E, H>::new(handler);
        self.handlers
            .entry(E::TYPE)
            .or_default()
            .push(Arc::new(typed_handler));
    }

    /// 現時点の購読者のスナップショット
    pub fn get(&self, event_type: &str) -> Vec<Arc<dyn DynHandler>> {
        self.handlers.get(event_type).cloned().unwrap_or_default()
    }

    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers.get(event_type).map_or(0, Vec::len)
    }

    pub fn registered_types(&self) -> Vec<String> {
        self.handlers.keys().map(|t| t.to_string()).collect()
    }
}
