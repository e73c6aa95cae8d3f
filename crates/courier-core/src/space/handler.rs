use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{ContentCreated, CourierError, SpaceCreationRequest};
use crate::ports::SpaceCreator;
use crate::typed::Handler;

/// SpaceHandler は ContentCreated を受けて space を作成する
///
/// EventBus が別タスクで呼ぶので、ContentService はこの完了を待ちません。
/// SpaceCreator の失敗は EventBus 側で捨てられます。
pub struct SpaceHandler {
    creator: Arc<dyn SpaceCreator>,
}

impl SpaceHandler {
    pub fn new(creator: Arc<dyn SpaceCreator>) -> Self {
        Self { creator }
    }
}

#[async_trait]
impl Handler<ContentCreated> for SpaceHandler {
    async fn handle(&self, event: ContentCreated) -> Result<(), CourierError> {
        self.creator
            .create(SpaceCreationRequest::new(event.id))
            .await
            .map(|_| ())
    }
}
