//! Desktop notifications via notify-rust (D-Bus).
//!
//! Alerts are sent persistent and never-expiring; they stay visible
//! until explicitly closed or replaced by the monitor.

use notify_rust::{Hint, Notification, Timeout};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification service unavailable: {0}")]
    Init(String),
    #[error("failed to send notification: {0}")]
    Send(String),
    #[error("failed to close notification {id}: {reason}")]
    Close { id: u32, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Normal,
    Critical,
}

impl From<Urgency> for notify_rust::Urgency {
    fn from(urgency: Urgency) -> Self {
        match urgency {
            Urgency::Normal => notify_rust::Urgency::Normal,
            Urgency::Critical => notify_rust::Urgency::Critical,
        }
    }
}

/// Send/close access to a single visible alert, addressed by the
/// server-assigned identifier. Identifier 0 means "none".
pub trait Notifier {
    fn send(
        &mut self,
        summary: &str,
        body: &str,
        urgency: Urgency,
        icon: &str,
    ) -> Result<u32, NotifyError>;

    /// Close a previously sent notification. Closing id 0 is a no-op,
    /// never an error, so callers may close unconditionally.
    fn close(&mut self, id: u32) -> Result<(), NotifyError>;
}

pub struct DesktopNotifier {
    app_name: String,
    // Handles of still-open notifications; notify-rust closes through
    // the handle rather than by bare id. The old handle must survive a
    // replacing send until the caller closes its id.
    open: Vec<notify_rust::NotificationHandle>,
}

impl DesktopNotifier {
    /// Connect to the notification service. Fails if no server is
    /// reachable on the session bus.
    pub fn new(app_name: &str) -> Result<Self, NotifyError> {
        let info =
            notify_rust::get_server_information().map_err(|e| NotifyError::Init(e.to_string()))?;
        debug!("Notification server: {} ({})", info.name, info.vendor);

        Ok(Self {
            app_name: app_name.to_string(),
            open: Vec::new(),
        })
    }
}

impl Notifier for DesktopNotifier {
    fn send(
        &mut self,
        summary: &str,
        body: &str,
        urgency: Urgency,
        icon: &str,
    ) -> Result<u32, NotifyError> {
        let handle = Notification::new()
            .appname(&self.app_name)
            .summary(summary)
            .body(body)
            .icon(icon)
            .urgency(urgency.into())
            .hint(Hint::Resident(true))
            .hint(Hint::Transient(false))
            .timeout(Timeout::Never)
            .show()
            .map_err(|e| NotifyError::Send(e.to_string()))?;

        let id = handle.id();
        debug!("Sent notification {id}: {summary}");
        self.open.push(handle);
        Ok(id)
    }

    fn close(&mut self, id: u32) -> Result<(), NotifyError> {
        if id == 0 {
            return Ok(());
        }

        match self.open.iter().position(|handle| handle.id() == id) {
            Some(index) => {
                self.open.swap_remove(index).close();
                debug!("Closed notification {id}");
                Ok(())
            }
            None => Err(NotifyError::Close {
                id,
                reason: "no such notification".into(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disconnected() -> DesktopNotifier {
        DesktopNotifier {
            app_name: "test".into(),
            open: Vec::new(),
        }
    }

    #[test]
    fn close_zero_is_a_no_op() {
        let mut notifier = disconnected();
        assert!(notifier.close(0).is_ok());
    }

    #[test]
    fn close_unknown_id_is_a_close_error() {
        let mut notifier = disconnected();
        assert!(matches!(
            notifier.close(42),
            Err(NotifyError::Close { id: 42, .. })
        ));
    }

    #[test]
    fn urgency_maps_to_wire_levels() {
        assert_eq!(
            notify_rust::Urgency::from(Urgency::Normal),
            notify_rust::Urgency::Normal
        );
        assert_eq!(
            notify_rust::Urgency::from(Urgency::Critical),
            notify_rust::Urgency::Critical
        );
    }
}
