// src/persistence/notifier.rs

use log::warn;

/// Channel for messages the user must see, as opposed to log output
pub trait UserNotifier: Send + Sync {
    fn warn(&self, message: &str);
}

/// Routes user warnings into the log. Used when there is no interactive
/// surface to show them on.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl UserNotifier for LogNotifier {
    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}
