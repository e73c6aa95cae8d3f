//! ContentCreator port - entry point から見た content 作成

use crate::domain::{Content, ContentCreationRequest, CourierError};

/// ContentCreator は作成依頼から Content を作り、ContentCreated を発行する
///
/// 呼び出し元のスレッドで同期的に完了します。購読者の完了は待ちません。
pub trait ContentCreator: Send + Sync {
    fn create(&self, request: ContentCreationRequest) -> Result<Content, CourierError>;
}
