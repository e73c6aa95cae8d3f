//! Domain model (ids, content, space, events, errors).

pub mod ids;
pub mod content;
pub mod space;
pub mod events;
pub mod errors;

pub use self::ids::{ContentId, Id, IdMarker, SpaceId};
pub use self::content::{Content, ContentCreationRequest};
pub use self::space::{Space, SpaceCreationRequest};
pub use self::events::ContentCreated;
pub use self::errors::CourierError;
