use std::fmt::Write;

use crate::update::Notification;

pub const NOTIFICATION_SUBJECT: &str = "Amazon Low Price Notification";

/// Plain-text message body listing every notified product.
pub fn render_message(notifications: &[Notification]) -> String {
    let mut message = String::new();
    for n in notifications {
        let _ = write!(
            message,
            "{} is now ￥{} ({} pt)\n{}\n\n",
            n.title, n.price, n.point, n.url
        );
    }
    message
}
