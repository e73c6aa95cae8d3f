//! Event trait - 型付き通知の定義

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Event は event_type と型を対応付ける
///
/// # 使用例
/// ```ignore
/// #[derive(Serialize, Deserialize)]
/// struct MyEvent {
///     message: String,
/// }
///
/// impl Event for MyEvent {
///     const TYPE: &'static str = "my_namespace.my_event.v1";
/// }
/// ```
///
/// # Trait Bounds
/// - `Serialize`: publish 時に一度だけ JSON にする
/// - `DeserializeOwned`: 購読者ごとに JSON から復元する
/// - `Send + Sync + 'static`: 別タスクへ渡すため
pub trait Event: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// event_type の定義
    ///
    /// # 命名規約
    /// - `{namespace}.{domain}.{action}.v{major}`
    /// - 例: `courier.content.created.v1`
    const TYPE: &'static str;
}
