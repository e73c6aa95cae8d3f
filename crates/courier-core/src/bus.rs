//! EventBus - プロセス内 pub/sub
//!
//! - event_type → 購読者リストの TypedRegistry を RwLock で共有
//! - publish は購読者ごとに tokio タスクを spawn して即座に戻る（fire-and-forget）
//! - 購読者の失敗は呼び出し元に返さず、リトライもしない

use std::sync::{Arc, RwLock};

use tokio::runtime::Handle;
use tracing::debug;

use crate::domain::CourierError;
use crate::typed::{Event, Handler, TypedRegistry};

/// EventBus はプロセスに 1 つだけ作り、Clone して共有する
///
/// # 使用例
/// ```ignore
/// let bus = EventBus::current()?;
/// bus.subscribe::<ContentCreated, _>(SpaceHandler::new(creator))?;
/// let dispatched = bus.publish(&ContentCreated::new(content))?;
/// ```
#[derive(Clone)]
pub struct EventBus {
    registry: Arc<RwLock<TypedRegistry>>,
    runtime: Handle,
}

impl EventBus {
    /// 購読者を実行する runtime を指定して作成
    pub fn new(runtime: Handle) -> Self {
        Self {
            registry: Arc::new(RwLock::new(TypedRegistry::new())),
            runtime,
        }
    }

    /// 現在の tokio runtime 上で作成
    pub fn current() -> Result<Self, CourierError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| CourierError::NoRuntime)
    }

    /// `E` の購読者を追加する。以降の publish から呼ばれる
    pub fn subscribe<E: Event, H: Handler<E> + 'static>(
        &self,
        handler: H,
    ) -> Result<(), CourierError> {
        let mut registry = self
            .registry
            .write()
            .map_err(|_| CourierError::RegistryPoisoned)?;
        registry.register::<E, H>(handler);

        debug!(
            event_type = E::TYPE,
            subscribers = registry.handler_count(E::TYPE),
            "subscribed"
        );
        Ok(())
    }

    /// イベントを全購読者に配送する
    ///
    /// 戻り値は spawn した購読者の数。購読者の完了は待たない。
    pub fn publish<E: Event>(&self, event: &E) -> Result<usize, CourierError> {
        let handlers = self
            .registry
            .read()
            .map_err(|_| CourierError::RegistryPoisoned)?
            .get(E::TYPE);

        if handlers.is_empty() {
            debug!(event_type = E::TYPE, "no subscribers");
            return Ok(0);
        }

        let payload = serde_json::to_value(event).map_err(|source| CourierError::Encode {
            event_type: E::TYPE,
            source,
        })?;
        let payload = Arc::new(payload);

        for handler in &handlers {
            let handler = Arc::clone(handler);
            let payload = Arc::clone(&payload);
            self.runtime.spawn(async move {
                // 失敗は握りつぶす（呼び出し元には届かない）
                if let Err(err) = handler.handle_dyn(&payload).await {
                    debug!(event_type = handler.event_type(), error = %err, "subscriber failed");
                }
            });
        }

        debug!(event_type = E::TYPE, subscribers = handlers.len(), "published");
        Ok(handlers.len())
    }

    pub fn handler_count<E: Event>(&self) -> usize {
        self.registry
            .read()
            .map(|registry| registry.handler_count(E::TYPE))
            .unwrap_or(0)
    }

    pub fn registered_types(&self) -> Vec<String> {
        self.registry
            .read()
            .map(|registry| registry.registered_types())
            .unwrap_or_default()
    }
}
