//! AppBuilder - アプリケーションの構築とワイヤリング
//!
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use std::sync::Arc;

use tracing::info;

use crate::bus::EventBus;
use crate::content::ContentService;
use crate::domain::{ContentCreated, CourierError};
use crate::ports::{IdGenerator, SpaceCreator, SystemClock, UlidGenerator};
use crate::space::{SpaceHandler, SpaceService};
use crate::typed::{Event, Handler};

/// AppBuilder はアプリケーションを構築
///
/// # 使用例
/// ```ignore
/// let app = AppBuilder::new(EventBus::current()?)
///     .expect_events(&[ContentCreated::TYPE])
///     .build()?;
/// app.content().create(ContentCreationRequest::new("hello"))?;
/// ```
///
/// # Fail-fast 設計
/// - expect_events() で「購読者が必ずいるべき」event_type を登録
/// - build() 時に「期待集合 ⊆ 購読済み集合」をチェック
/// - 不足があれば BuildError を返す
pub struct AppBuilder {
    bus: EventBus,
    ids: Arc<dyn IdGenerator>,
    space_creator: Option<Arc<dyn SpaceCreator>>,
    expected_events: Option<Vec<String>>,
}

/// BuildError はアプリケーション構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing subscribers for event types: {0:?}. These events were expected but nobody listens.")]
    MissingSubscribers(Vec<String>),

    #[error(transparent)]
    Bus(#[from] CourierError),
}

impl AppBuilder {
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            ids: Arc::new(UlidGenerator::new(SystemClock)),
            space_creator: None,
            expected_events: None,
        }
    }

    /// ID 生成器を差し替える（ContentService と SpaceService で共有）
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// SpaceCreator を差し替える（省略時は SpaceService）
    pub fn with_space_creator(mut self, creator: Arc<dyn SpaceCreator>) -> Self {
        self.space_creator = Some(creator);
        self
    }

    /// SpaceHandler 以外の購読者を追加
    pub fn subscribe<E: Event, H: Handler<E> + 'static>(
        self,
        handler: H,
    ) -> Result<Self, BuildError> {
        self.bus.subscribe::<E, H>(handler)?;
        Ok(self)
    }

    /// 購読者が必要な event_type のリストを設定
    pub fn expect_events(mut self, event_types: &[&str]) -> Self {
        self.expected_events = Some(event_types.iter().map(|t| t.to_string()).collect());
        self
    }

    /// ワイヤリングして App を生成
    ///
    /// 1. SpaceHandler を ContentCreated に購読させる
    /// 2. expect_events() の event_type が全て購読済みかチェック
    pub fn build(self) -> Result<App, BuildError> {
        let space_creator: Arc<dyn SpaceCreator> = match self.space_creator {
            Some(creator) => creator,
            None => Arc::new(SpaceService::new(Arc::clone(&self.ids))),
        };
        self.bus
            .subscribe::<ContentCreated, _>(SpaceHandler::new(space_creator))?;

        if let Some(expected_events) = &self.expected_events {
            let registered_types = self.bus.registered_types();
            let missing: Vec<String> = expected_events
                .iter()
                .filter(|x| !registered_types.contains(x))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(BuildError::MissingSubscribers(missing));
            }
        }

        let content = Arc::new(ContentService::new(self.ids, self.bus.clone()));

        info!(event_types = ?self.bus.registered_types(), "app wired");
        Ok(App {
            bus: self.bus,
            content,
        })
    }
}

/// App は組み立て済みのコンポーネント一式
///
/// プロセスに 1 つだけ作り、entry point に渡します。
pub struct App {
    bus: EventBus,
    content: Arc<ContentService>,
}

impl App {
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn content(&self) -> Arc<ContentService> {
        Arc::clone(&self.content)
    }
}
