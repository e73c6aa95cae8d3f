//! Content - content モジュールの値オブジェクト

use serde::{Deserialize, Serialize};

use super::ids::ContentId;

/// ContentCreationRequest は外部から届く作成依頼
///
/// 一度だけ `ContentCreator::create` に渡されて消費されます。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCreationRequest {
    pub content: String,
}

impl ContentCreationRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Content は作成時に ID が確定し、以降は変更されない
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    id: ContentId,
    content: String,
}

impl Content {
    pub fn new(id: ContentId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
