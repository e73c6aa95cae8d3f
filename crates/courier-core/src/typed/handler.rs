//! Handler trait - Event を受け取る購読者の定義
//!
//! - ジェネリック trait (Handler<E>)
//! - Object-safe trait (DynHandler)
//! - Type erasure パターン (TypedHandler<E, H> → DynHandler)

use super::event::Event;
use crate::domain::CourierError;
use async_trait::async_trait;
use std::marker::PhantomData;

/// Handler は Event を受け取って処理する
///
/// # 使用例
/// ```ignore
/// struct AuditHandler;
///
/// #[async_trait]
/// impl Handler<ContentCreated> for AuditHandler {
///     async fn handle(&self, event: ContentCreated) -> Result<(), CourierError> {
///         tracing::info!(content_id = %event.id, "audited");
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Handler<E: Event>: Send + Sync {
    async fn handle(&self, event: E) -> Result<(), CourierError>;
}

/// DynHandler は object-safe な Handler の抽象化
///
/// TypedHandler<E, H> を DynHandler に変換することで、
/// HashMap<&str, Vec<Arc<dyn DynHandler>>> に格納可能にします。
#[async_trait]
pub trait DynHandler: Send + Sync {
    async fn handle_dyn(&self, payload: &serde_json::Value) -> Result<(), CourierError>;
    fn event_type(&self) -> &'static str;
}

pub struct TypedHandler<E: Event, H: Handler<E>> {
    handler: H,
    _marker: PhantomData<fn(E)>,
}

impl<E: Event, H: Handler<E>> TypedHandler<E, H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Event, H: Handler<E>> DynHandler for TypedHandler<E, H> {
    async fn handle_dyn(&self, payload: &serde_json::Value) -> Result<(), CourierError> {
        let event = E::deserialize(payload).map_err(|source| CourierError::Decode {
            event_type: E::TYPE,
            source,
        })?;
        self.handler.handle(event).await
    }

    fn event_type(&self) -> &'static str {
        E::TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Pinged {
        value: i32,
    }

    impl Event for Pinged {
        const TYPE: &'static str = "test.ping.sent.v1";
    }

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<Pinged>>,
    }

    #[async_trait]
    impl Handler<Pinged> for Recorder {
        async fn handle(&self, event: Pinged) -> Result<(), CourierError> {
            self.seen.lock().unwrap().push(event);
            Ok(())
        }
    }

    #[tokio::test]
    async fn typed_handler_decodes_payload() {
        let typed_handler = TypedHandler::<Pinged, _>::new(Recorder::default());

        typed_handler.handle_dyn(&json!({ "value": 100 })).await.unwrap();

        assert_eq!(typed_handler.event_type(), Pinged::TYPE);
        assert_eq!(
            *typed_handler.handler.seen.lock().unwrap(),
            vec![Pinged { value: 100 }]
        );
    }

    #[tokio::test]
    async fn typed_handler_rejects_foreign_payload() {
        let typed_handler = TypedHandler::<Pinged, _>::new(Recorder::default());

        let err = typed_handler
            .handle_dyn(&json!({ "name": "not a ping" }))
            .await
            .unwrap_err();

        assert!(matches!(err, CourierError::Decode { event_type, .. } if event_type == Pinged::TYPE));
        assert!(typed_handler.handler.seen.lock().unwrap().is_empty());
    }
}
