//! Blocking user alerts.

use coursenotes_core::UserAlert;
use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

const ALERT_TITLE: &str = "Course Notes";

/// Show a modal error dialog and wait until the user dismisses it.
pub async fn show_alert(alert: &UserAlert) {
    tracing::warn!("Alerting user: {} ({})", alert.message, alert.detail);

    let _ = AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(ALERT_TITLE)
        .set_description(alert.message.as_str())
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
