//! Page-level overrides for the mobile menu.
//!
//! The page may put a JSON object on the root element:
//!
//! ```html
//! <html data-mobile-menu='{"breakpoint_px": 1024}'>
//! ```

use contracts::shared::mobile_menu::MobileMenuConfig;
use web_sys::Document;

pub const CONFIG_ATTRIBUTE: &str = "data-mobile-menu";

/// Read the config from the document, falling back to defaults.
pub fn load_config(document: &Document) -> MobileMenuConfig {
    let raw = document
        .document_element()
        .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE));
    resolve_config(raw.as_deref())
}

/// Parse raw attribute text. Invalid overrides are logged and ignored as a whole.
pub fn resolve_config(raw: Option<&str>) -> MobileMenuConfig {
    match raw.map(str::trim) {
        None | Some("") => MobileMenuConfig::default(),
        Some(json) => match MobileMenuConfig::from_json(json) {
            Ok(config) => {
                log::debug!("mobile menu config overrides: {}", json);
                config
            }
            Err(err) => {
                log::warn!("ignoring {}: {}", CONFIG_ATTRIBUTE, err);
                MobileMenuConfig::default()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute_uses_defaults() {
        assert_eq!(resolve_config(None), MobileMenuConfig::default());
        assert_eq!(resolve_config(Some("   ")), MobileMenuConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = resolve_config(Some(r##" {"sidebar_selector": "#nav", "resize_debounce_ms": 120} "##));
        assert_eq!(config.sidebar_selector, "#nav");
        assert_eq!(config.resize_debounce_ms, 120);
        assert_eq!(config.breakpoint_px, 968.0);
    }

    #[test]
    fn test_invalid_overrides_fall_back_entirely() {
        let config = resolve_config(Some(r#"{"toggle_id": "burger", "breakpoint_px": 0}"#));
        assert_eq!(config, MobileMenuConfig::default());
    }
}
