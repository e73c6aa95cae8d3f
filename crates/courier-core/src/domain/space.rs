//! Space - space モジュールの値オブジェクト
//!
//! `SpaceCreationRequest` は ID を持たず、`SpaceCreator` が ID を採番した
//! `Space` を一度に組み立てて返します（作成後に ID を書き込むことはしない）。

use serde::{Deserialize, Serialize};

use super::ids::{ContentId, SpaceId};

/// SpaceCreationRequest は space 作成の依頼
///
/// 必ず 1 つの Content を参照します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceCreationRequest {
    source_content_id: ContentId,
}

impl SpaceCreationRequest {
    pub fn new(source_content_id: ContentId) -> Self {
        Self { source_content_id }
    }

    pub fn source_content_id(&self) -> ContentId {
        self.source_content_id
    }
}

/// Space は採番済みの space レコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    id: SpaceId,
    source_content_id: ContentId,
}

impl Space {
    /// 依頼と新しい ID から Space を組み立てる
    pub fn new(id: SpaceId, request: SpaceCreationRequest) -> Self {
        Self {
            id,
            source_content_id: request.source_content_id,
        }
    }

    pub fn id(&self) -> SpaceId {
        self.id
    }

    pub fn source_content_id(&self) -> ContentId {
        self.source_content_id
    }
}
