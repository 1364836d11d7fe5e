//! Mobile navigation menu: state, triggers and configuration.
//!
//! Target-independent part of the mobile sidebar. The browser binding lives in
//! the frontend crate and only projects [`MenuState`] onto the page.

use serde::Deserialize;
use thiserror::Error;

/// Open/closed state of the mobile sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(&self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuState::Closed => "closed",
            MenuState::Open => "open",
        }
    }
}

/// Events that may change the menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTrigger {
    /// Hamburger button click
    ToggleClick,
    /// Click on the full-screen overlay
    OverlayClick,
    /// Click on a navigation entry inside the sidebar
    MenuItemClick,
    /// Debounced resize check fired
    ResizeSettled,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid mobile menu config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must not be empty")]
    Blank { field: &'static str },
    #[error("breakpoint must be a positive finite width, got {0}")]
    Breakpoint(f64),
    #[error("resize debounce must be greater than zero")]
    ZeroDebounce,
}

/// Element lookup, marker classes and timing for the mobile menu.
///
/// Every field has a default, so a partial JSON object only overrides what it names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MobileMenuConfig {
    pub toggle_id: String,
    pub sidebar_selector: String,
    pub overlay_id: String,
    pub menu_item_selector: String,
    pub sidebar_open_class: String,
    /// Marker for both the overlay and the toggle button
    pub active_class: String,
    /// Widths at or below this value use the mobile layout
    pub breakpoint_px: f64,
    pub resize_debounce_ms: u32,
    pub scroll_lock_overflow: String,
}

pub const DEFAULT_BREAKPOINT_PX: f64 = 968.0;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;

impl Default for MobileMenuConfig {
    fn default() -> Self {
        Self {
            toggle_id: "mobileMenuToggle".to_string(),
            sidebar_selector: ".layout-sidebar".to_string(),
            overlay_id: "mobileOverlay".to_string(),
            menu_item_selector: ".menu-item".to_string(),
            sidebar_open_class: "mobile-open".to_string(),
            active_class: "active".to_string(),
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            scroll_lock_overflow: "hidden".to_string(),
        }
    }
}

impl MobileMenuConfig {
    /// Parse overrides from JSON and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("toggle_id", &self.toggle_id),
            ("sidebar_selector", &self.sidebar_selector),
            ("overlay_id", &self.overlay_id),
            ("menu_item_selector", &self.menu_item_selector),
            ("sidebar_open_class", &self.sidebar_open_class),
            ("active_class", &self.active_class),
            ("scroll_lock_overflow", &self.scroll_lock_overflow),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ConfigError::Blank { field });
            }
        }

        if !self.breakpoint_px.is_finite() || self.breakpoint_px <= 0.0 {
            return Err(ConfigError::Breakpoint(self.breakpoint_px));
        }
        if self.resize_debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        Ok(())
    }

    /// `true` when the menu-item auto-close applies.
    pub fn is_mobile_viewport(&self, width: f64) -> bool {
        width <= self.breakpoint_px
    }

    /// `true` when a settled resize should force the menu closed.
    ///
    /// Not the negation of [`Self::is_mobile_viewport`]: an unknown (NaN) width is neither.
    pub fn is_desktop_viewport(&self, width: f64) -> bool {
        width > self.breakpoint_px
    }
}

/// Resolve the state a trigger leads to.
///
/// `None` means the trigger has no effect. `Some` is returned even when the
/// state does not change, since forced closes rewrite the markers anyway.
pub fn next_state(
    current: MenuState,
    trigger: MenuTrigger,
    viewport_width: f64,
    config: &MobileMenuConfig,
) -> Option<MenuState> {
    match trigger {
        MenuTrigger::ToggleClick => Some(current.toggled()),
        MenuTrigger::OverlayClick => Some(MenuState::Closed),
        MenuTrigger::MenuItemClick => config
            .is_mobile_viewport(viewport_width)
            .then_some(MenuState::Closed),
        MenuTrigger::ResizeSettled => config
            .is_desktop_viewport(viewport_width)
            .then_some(MenuState::Closed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_state() {
        let config = MobileMenuConfig::default();
        let opened = next_state(MenuState::Closed, MenuTrigger::ToggleClick, 500.0, &config);
        assert_eq!(opened, Some(MenuState::Open));
        let closed = next_state(MenuState::Open, MenuTrigger::ToggleClick, 1200.0, &config);
        assert_eq!(closed, Some(MenuState::Closed));
    }

    #[test]
    fn test_overlay_always_closes() {
        let config = MobileMenuConfig::default();
        for state in [MenuState::Open, MenuState::Closed] {
            for width in [320.0, 968.0, 1920.0] {
                assert_eq!(
                    next_state(state, MenuTrigger::OverlayClick, width, &config),
                    Some(MenuState::Closed)
                );
            }
        }
    }

    #[test]
    fn test_menu_item_breakpoint_is_inclusive() {
        let config = MobileMenuConfig::default();
        let at = |width| next_state(MenuState::Open, MenuTrigger::MenuItemClick, width, &config);
        assert_eq!(at(968.0), Some(MenuState::Closed));
        assert_eq!(at(500.0), Some(MenuState::Closed));
        assert_eq!(at(969.0), None);
    }

    #[test]
    fn test_resize_closes_only_on_desktop() {
        let config = MobileMenuConfig::default();
        let at = |width| next_state(MenuState::Open, MenuTrigger::ResizeSettled, width, &config);
        assert_eq!(at(968.0), None);
        assert_eq!(at(969.0), Some(MenuState::Closed));
        assert_eq!(
            next_state(MenuState::Closed, MenuTrigger::ResizeSettled, 1200.0, &config),
            Some(MenuState::Closed)
        );
    }

    #[test]
    fn test_unknown_width_is_neither_mobile_nor_desktop() {
        let config = MobileMenuConfig::default();
        assert!(!config.is_mobile_viewport(f64::NAN));
        assert!(!config.is_desktop_viewport(f64::NAN));
        assert_eq!(
            next_state(MenuState::Open, MenuTrigger::ResizeSettled, f64::NAN, &config),
            None
        );
    }

    #[test]
    fn test_custom_breakpoint_applies_to_both_triggers() {
        let config = MobileMenuConfig {
            breakpoint_px: 600.0,
            ..Default::default()
        };
        assert_eq!(
            next_state(MenuState::Open, MenuTrigger::MenuItemClick, 700.0, &config),
            None
        );
        assert_eq!(
            next_state(MenuState::Open, MenuTrigger::ResizeSettled, 700.0, &config),
            Some(MenuState::Closed)
        );
    }

    #[test]
    fn test_from_json_partial_override() {
        let config =
            MobileMenuConfig::from_json(r#"{"breakpoint_px": 1024, "overlay_id": "navShade"}"#)
                .unwrap();
        assert_eq!(config.breakpoint_px, 1024.0);
        assert_eq!(config.overlay_id, "navShade");
        assert_eq!(config.toggle_id, "mobileMenuToggle");
        assert_eq!(config.resize_debounce_ms, 250);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            MobileMenuConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            MobileMenuConfig::from_json(r#"{"breakpoint": 900}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            MobileMenuConfig::from_json(r#"{"active_class": "  "}"#),
            Err(ConfigError::Blank { field: "active_class" })
        ));
        assert!(matches!(
            MobileMenuConfig::from_json(r#"{"breakpoint_px": -1}"#),
            Err(ConfigError::Breakpoint(_))
        ));
        assert!(matches!(
            MobileMenuConfig::from_json(r#"{"resize_debounce_ms": 0}"#),
            Err(ConfigError::ZeroDebounce)
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(MobileMenuConfig::default().validate().is_ok());
    }
}
