//! Blocking user-facing notifications.

pub trait FailureNotifier {
    fn notify(&self, message: &str);
}

/// Shows `window.alert`. Without a window the message only goes to the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl FailureNotifier for BrowserAlert {
    fn notify(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    log::error!("Failed to show alert: {:?}", e);
                }
            }
            None => log::error!("No window object, alert suppressed: {}", message),
        }
    }
}
