// Marker conventions and behavior tuning.

use serde::{Deserialize, Serialize};

/// Class carried by dismissible notice banners.
pub const NOTICE_CLASS: &str = "alert";

/// Attribute marking elements whose default action needs confirmation.
/// Its value is the prompt text; absent or empty means the default text.
pub const CONFIRM_ATTR: &str = "data-confirm";

/// Behavior tuning - persisted in settings.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Delay before visible notices are swept, in milliseconds.
    #[serde(default = "default_dismiss_delay_ms")]
    pub dismiss_delay_ms: u64,
    /// Prompt text for guarded elements that carry no message of their own.
    #[serde(default = "default_confirm_message")]
    pub default_confirm_message: String,
}

fn default_dismiss_delay_ms() -> u64 {
    5000
}

fn default_confirm_message() -> String {
    "Вы уверены?".to_string()
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            dismiss_delay_ms: default_dismiss_delay_ms(),
            default_confirm_message: default_confirm_message(),
        }
    }
}

/// Resolve the prompt text for a guarded element. An absent or empty
/// attribute falls back to the configured default.
pub fn resolve_message(attr: Option<&str>, fallback: &str) -> String {
    match attr {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BehaviorConfig::default();
        assert_eq!(config.dismiss_delay_ms, 5000);
        assert_eq!(config.default_confirm_message, "Вы уверены?");
    }

    #[test]
    fn test_resolve_message_prefers_attribute() {
        assert_eq!(
            resolve_message(Some("Delete this item?"), "Вы уверены?"),
            "Delete this item?"
        );
    }

    #[test]
    fn test_resolve_message_falls_back_when_absent_or_empty() {
        assert_eq!(resolve_message(None, "Вы уверены?"), "Вы уверены?");
        assert_eq!(resolve_message(Some(""), "Вы уверены?"), "Вы уверены?");
        // Whitespace is a message, not an absence.
        assert_eq!(resolve_message(Some(" "), "Вы уверены?"), " ");
    }

    #[test]
    fn test_config_deserializes_with_partial_fields() {
        let config: BehaviorConfig = serde_json::from_str(r#"{"dismiss_delay_ms": 250}"#).unwrap();
        assert_eq!(config.dismiss_delay_ms, 250);
        assert_eq!(config.default_confirm_message, "Вы уверены?");
    }
}
