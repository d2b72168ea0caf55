//! Explicit application view-state shared across screens.
//!
//! Frontends construct one [`AppState`] and pass it to the screens that need
//! it; nothing here is process-global. `reset` restores the documented
//! initial values.

/// Color scheme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Default accent color applied on first launch and after reset.
pub const DEFAULT_ACCENT_COLOR: &str = "#03C9D7";

/// Top-level UI state: theme, accent color, and navigation chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    pub mode: ThemeMode,
    pub accent_color: String,
    pub active_menu: bool,
    pub theme_panel_open: bool,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: ThemeMode::Light,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            active_menu: true,
            theme_panel_open: false,
        }
    }

    /// Restore the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.theme_panel_open = false;
    }

    pub fn set_accent_color(&mut self, color: impl Into<String>) {
        self.accent_color = color.into();
        self.theme_panel_open = false;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
