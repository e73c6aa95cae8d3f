use std::sync::Arc;
use std::thread;

use tracing::info;

use crate::bus::EventBus;
use crate::domain::{Content, ContentCreated, ContentCreationRequest, CourierError};
use crate::ports::{ContentCreator, IdGenerator};

/// ContentService は Content を作成して ContentCreated を発行する
pub struct ContentService {
    ids: Arc<dyn IdGenerator>,
    bus: EventBus,
}

impl ContentService {
    pub fn new(ids: Arc<dyn IdGenerator>, bus: EventBus) -> Self {
        Self { ids, bus }
    }
}

impl ContentCreator for ContentService {
    fn create(&self, request: ContentCreationRequest) -> Result<Content, CourierError> {
        let content = Content::new(self.ids.generate_content_id(), request.content);
        let event = ContentCreated::new(content.clone());

        info!(
            content_id = %content.id(),
            thread = ?thread::current().id(),
            "content create"
        );

        self.bus.publish(&event)?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{SystemClock, UlidGenerator};
    use crate::typed::Handler;
    use async_trait::async_trait;
    use rstest::rstest;
    use std::collections::HashSet;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    struct Capture(mpsc::UnboundedSender<ContentCreated>);

    #[async_trait]
    impl Handler<ContentCreated> for Capture {
        async fn handle(&self, event: ContentCreated) -> Result<(), CourierError> {
            self.0
                .send(event)
                .map_err(|e| CourierError::Handler(e.to_string()))
        }
    }

    fn service(bus: EventBus) -> ContentService {
        ContentService::new(Arc::new(UlidGenerator::new(SystemClock)), bus)
    }

    #[tokio::test]
    async fn ids_are_non_empty_and_unique() {
        let service = service(EventBus::current().unwrap());

        let ids: HashSet<String> = (0..100)
            .map(|i| {
                service
                    .create(ContentCreationRequest::new(format!("body {i}")))
                    .unwrap()
                    .id()
                    .to_string()
            })
            .collect();

        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[rstest]
    #[case::plain("hello")]
    #[case::empty("")]
    #[case::multiline("line one\nline two")]
    #[tokio::test]
    async fn create_publishes_matching_event(#[case] text: &str) {
        let bus = EventBus::current().unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();
        bus.subscribe::<ContentCreated, _>(Capture(tx)).unwrap();

        let content = service(bus)
            .create(ContentCreationRequest::new(text))
            .unwrap();

        let event = timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event.id, content.id());
        assert_eq!(event.content, text);
        assert_eq!(event.source(), &content);
    }

    #[tokio::test]
    async fn create_succeeds_without_subscribers() {
        let content = service(EventBus::current().unwrap())
            .create(ContentCreationRequest::new("nobody listens"))
            .unwrap();

        assert_eq!(content.content(), "nobody listens");
    }
}
