//! SpaceCreator port - space 作成

use async_trait::async_trait;

use crate::domain::{CourierError, Space, SpaceCreationRequest};

/// SpaceCreator は依頼に ID を採番して Space を返す
#[async_trait]
pub trait SpaceCreator: Send + Sync {
    async fn create(&self, request: SpaceCreationRequest) -> Result<Space, CourierError>;
}
