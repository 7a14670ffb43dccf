//! Row styling configuration.
//!
//! Comments and replies are drawn in distinct styles so the two levels are
//! told apart even without indentation.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether colors are emitted at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== RowStyles =====

/// Styles for the parts of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStyles {
    pub comment: Style,
    pub reply: Style,
    pub affordance: Style,
    /// Overlay for the selected row.
    pub selected: Style,
    /// Overlay for rows inserted by the last toggle.
    pub inserted: Style,
}

impl RowStyles {
    /// Styles for the given color configuration.
    ///
    /// Without colors only modifiers are used.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                comment: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                reply: Style::default().fg(Color::Gray),
                affordance: Style::default().fg(Color::Cyan),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                inserted: Style::default().fg(Color::Green),
            }
        } else {
            Self {
                comment: Style::default().add_modifier(Modifier::BOLD),
                reply: Style::default(),
                affordance: Style::default().add_modifier(Modifier::UNDERLINED),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                inserted: Style::default(),
            }
        }
    }
}

impl Default for RowStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
