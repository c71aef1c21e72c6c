use anyhow::Result;
use colored::Colorize;

use crate::notify::{render_message, Notifier, NOTIFICATION_SUBJECT};
use crate::update::Notification;

/// Prints notifications to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notifications: &[Notification]) -> Result<()> {
        if notifications.is_empty() {
            return Ok(());
        }
        println!("{}", NOTIFICATION_SUBJECT.green().bold());
        print!("{}", render_message(notifications));
        Ok(())
    }
}
