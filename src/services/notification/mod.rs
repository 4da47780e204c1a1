use anyhow::Result;
use notify_rust::{Notification, Timeout};

/// Service for displaying system notifications
pub struct NotificationService {
    enabled: bool,
}

impl NotificationService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Tell the user a timer has run out
    pub fn show_timer_expired(&self, label: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        Notification::new()
            .summary(&expiry_summary(label))
            .body("Time's up!")
            .timeout(Timeout::Milliseconds(10000))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(())
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(true)
    }
}

fn expiry_summary(label: &str) -> String {
    let label = label.trim();
    if label.is_empty() {
        "Timer finished".to_string()
    } else {
        format!("{} finished", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_service_does_nothing() {
        let service = NotificationService::new(false);
        assert!(!service.is_enabled());
        assert!(service.show_timer_expired("Tea").is_ok());
    }

    #[test]
    fn test_expiry_summary() {
        assert_eq!(expiry_summary("Tea"), "Tea finished");
        assert_eq!(expiry_summary("   "), "Timer finished");
    }
}
