use std::sync::Arc;
use std::thread;

use async_trait::async_trait;
use tracing::info;

use crate::domain::{CourierError, Space, SpaceCreationRequest};
use crate::ports::{IdGenerator, SpaceCreator};

/// SpaceService は Space に ID を採番する
///
/// 永続化はしません。
pub struct SpaceService {
    ids: Arc<dyn IdGenerator>,
}

impl SpaceService {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

#[async_trait]
impl SpaceCreator for SpaceService {
    async fn create(&self, request: SpaceCreationRequest) -> Result<Space, CourierError> {
        let space = Space::new(self.ids.generate_space_id(), request);

        info!(
            space_id = %space.id(),
            source_content_id = %space.source_content_id(),
            thread = ?thread::current().id(),
            "space create"
        );

        Ok(space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContentId;
    use crate::ports::{SystemClock, UlidGenerator};

    #[tokio::test]
    async fn space_gets_its_own_id() {
        let ids: Arc<dyn IdGenerator> = Arc::new(UlidGenerator::new(SystemClock));
        let source = ids.generate_content_id();
        let service = SpaceService::new(ids);

        let space = service
            .create(SpaceCreationRequest::new(source))
            .await
            .unwrap();

        assert_eq!(space.source_content_id(), source);
        assert!(!space.id().to_string().is_empty());
        assert_ne!(space.id().to_string(), source.to_string());
        assert_ne!(space.id().as_ulid(), source.as_ulid());
    }

    #[tokio::test]
    async fn each_request_gets_a_fresh_id() {
        let service = SpaceService::new(Arc::new(UlidGenerator::new(SystemClock)));
        let source = ContentId::from_ulid(ulid::Ulid::new());

        let first = service.create(SpaceCreationRequest::new(source)).await.unwrap();
        let second = service.create(SpaceCreationRequest::new(source)).await.unwrap();

        assert_ne!(first.id(), second.id());
    }
}
