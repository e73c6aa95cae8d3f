//! Ports - 抽象化レイヤー
//!
//! 各 trait は差し替え可能な境界を表します。
//! 本番では `SystemClock` / `UlidGenerator` / `ContentService` / `SpaceService` を使い、
//! テストでは固定時刻や記録用の実装に差し替えます。

pub mod clock;
pub mod id_generator;
pub mod content_creator;
pub mod space_creator;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::content_creator::ContentCreator;
pub use self::space_creator::SpaceCreator;
