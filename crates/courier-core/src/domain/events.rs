//! Events - ドメインイベント
//!
//! イベントは「すでに起きたこと」を表す不変の値です。

use serde::{Deserialize, Serialize};

use super::content::Content;
use super::ids::ContentId;
use crate::typed::Event;

/// ContentCreated は content が作成されたことを通知する
///
/// `source` は発行元の Content そのもの。購読側は `id` / `content` だけ見れば足ります。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCreated {
    pub id: ContentId,
    pub content: String,
    source: Content,
}

impl ContentCreated {
    pub fn new(source: Content) -> Self {
        Self {
            id: source.id(),
            content: source.content().to_string(),
            source,
        }
    }

    pub fn source(&self) -> &Content {
        &self.source
    }
}

impl Event for ContentCreated {
    const TYPE: &'static str = "courier.content.created.v1";
}
