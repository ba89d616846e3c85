//! Helper configuration.

/// Props key that holds the bound value unless configured otherwise.
pub const DEFAULT_PROP: &str = "value";

/// Event name used to emit replacement values unless configured otherwise.
pub const DEFAULT_EVENT: &str = "input";

/// Selects which props key holds the bound value and which event name carries
/// replacement values upward. Fixed for the lifetime of one helper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitHelperConfig {
    pub prop: String,
    pub event: String,
}

impl EmitHelperConfig {
    pub fn new(prop: impl Into<String>, event: impl Into<String>) -> Self {
        EmitHelperConfig {
            prop: prop.into(),
            event: event.into(),
        }
    }
}

impl Default for EmitHelperConfig {
    fn default() -> Self {
        EmitHelperConfig::new(DEFAULT_PROP, DEFAULT_EVENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_conventional_names() {
        let config = EmitHelperConfig::default();
        assert_eq!(config.prop, "value");
        assert_eq!(config.event, "input");
    }

    #[test]
    fn custom_names() {
        let config = EmitHelperConfig::new("modelValue", "update:modelValue");
        assert_eq!(config.prop, "modelValue");
        assert_eq!(config.event, "update:modelValue");
    }
}
