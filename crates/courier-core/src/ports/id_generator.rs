//! IdGenerator port - ID 生成の抽象化
//!
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース（本番用）

use crate::domain::ids::{ContentId, SpaceId};
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator はグローバルに一意な ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（ContentService と SpaceService が別スレッドから共有する）
pub trait IdGenerator: Send + Sync {
    fn generate_content_id(&self) -> ContentId;

    fn generate_space_id(&self) -> SpaceId;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Clock から timestamp 部分を取り、残り 80-bit は乱数で埋めます。
/// FixedClock を使えば timestamp 部分だけ決定的になります。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn next_ulid(&self) -> Ulid {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        Ulid::from_parts(timestamp_ms, rand::random())
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_content_id(&self) -> ContentId {
        ContentId::from(self.next_ulid())
    }

    fn generate_space_id(&self) -> SpaceId {
        SpaceId::from(self.next_ulid())
    }
}
