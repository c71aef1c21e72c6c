pub mod console_notifier;
pub mod message;

pub use console_notifier::ConsoleNotifier;
pub use message::{render_message, NOTIFICATION_SUBJECT};

use anyhow::Result;

use crate::update::Notification;

/// Receives the products that reached their notify threshold in a run.
pub trait Notifier {
    fn notify(&self, notifications: &[Notification]) -> Result<()>;
}
