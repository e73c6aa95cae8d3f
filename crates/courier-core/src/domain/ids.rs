//! Domain identifiers (strongly-typed IDs).
//!
//! ULID (128-bit) をベースにした ID を Phantom type パターンで型分けします。
//!
//! ## ULID の特性
//! - **時刻でソート可能**: timestamp が先頭にあるため、生成順序でソートできる
//! - **分散生成可能**: 調整なしで生成できる
//! - **UUID互換**: 128-bit で UUID と同じサイズ
//!
//! `ContentId` と `SpaceId` は同じ表現ですが、コンパイル時に混同できません。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// IdMarker は各 ID 型のマーカー trait
///
/// Display で使うプレフィックス（"content-", "space-"）を提供します。
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// ジェネリック ID 型
///
/// `T` は PhantomData で、実行時にはメモリを消費しません。
///
/// # 例
/// ```ignore
/// let content_id: ContentId = Id::from(Ulid::new());
/// let space_id: SpaceId = Id::from(Ulid::new());
/// // content_id と space_id は異なる型なので、混同できない
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

// ========================================
// マーカー型の定義
// ========================================

/// Content のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentMarker {}

impl IdMarker for ContentMarker {
    fn prefix() -> &'static str {
        "content-"
    }
}

/// Space のマーカー型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpaceMarker {}

impl IdMarker for SpaceMarker {
    fn prefix() -> &'static str {
        "space-"
    }
}

/// Identifier of a Content record.
pub type ContentId = Id<ContentMarker>;

/// Identifier of a Space record.
pub type SpaceId = Id<SpaceMarker>;
