//! Models used by the terminal host

mod document;
mod notification;

pub use document::WatchedDocument;
pub use notification::{Notification, NotificationKind};
