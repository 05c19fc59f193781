//! Page styling configuration.
//!
//! One palette for the whole page, with category accents for skills and
//! projects. Everything collapses to the terminal default when colors are
//! disabled.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
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

    /// Colors forced on or off.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PageStyles =====

/// Styles for every page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStyles {
    colors: bool,
    /// Navbar brand.
    pub brand: Style,
    /// Navbar links.
    pub nav_link: Style,
    /// Navbar link of the section on screen.
    pub nav_active: Style,
    /// Navbar background once the page has scrolled.
    pub nav_solid: Style,
    /// Section headings and the hero name.
    pub heading: Style,
    /// Rules under headings.
    pub rule: Style,
    /// Body text.
    pub body: Style,
    /// Secondary text (periods, stacks, hints).
    pub muted: Style,
    /// Emphasised text (roles, degrees, project names).
    pub emphasis: Style,
    /// Hero background particles.
    pub particle: Style,
    /// Hero network nodes.
    pub node: Style,
    /// Cursor-following highlight.
    pub cursor: Style,
    /// Focused form field.
    pub focus: Style,
    /// Form inputs.
    pub input: Style,
    /// Buttons.
    pub button: Style,
    /// Validation and transport errors.
    pub error: Style,
    /// Success banner.
    pub success: Style,
}

impl PageStyles {
    /// Create styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                colors: true,
                brand: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                nav_link: Style::default().fg(Color::Gray),
                nav_active: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
                nav_solid: Style::default().bg(Color::Black),
                heading: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                rule: Style::default().fg(Color::Cyan),
                body: Style::default().fg(Color::Gray),
                muted: Style::default().fg(Color::DarkGray),
                emphasis: Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                particle: Style::default().fg(Color::DarkGray),
                node: Style::default().fg(Color::Blue),
                cursor: Style::default().bg(Color::Cyan).fg(Color::Black),
                focus: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                input: Style::default().fg(Color::White),
                button: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::Red),
                success: Style::default().fg(Color::Green),
            }
        } else {
            let plain = Style::default();
            let bold = plain.add_modifier(Modifier::BOLD);
            Self {
                colors: false,
                brand: bold,
                nav_link: plain,
                nav_active: plain.add_modifier(Modifier::UNDERLINED),
                nav_solid: plain,
                heading: bold,
                rule: plain,
                body: plain,
                muted: plain,
                emphasis: bold,
                particle: plain,
                node: plain,
                cursor: plain.add_modifier(Modifier::REVERSED),
                focus: bold,
                input: plain,
                button: plain.add_modifier(Modifier::REVERSED),
                error: bold,
                success: bold,
            }
        }
    }

    /// Style for an item that is still entering.
    pub fn entering(&self, base: Style) -> Style {
        base.add_modifier(Modifier::DIM)
    }

    /// Accent style for a skill or project category.
    pub fn category(&self, category: &str) -> Style {
        if !self.colors {
            return Style::default();
        }
        let color = match category.to_ascii_lowercase().as_str() {
            "devops" | "ci/cd" | "automation" => Color::Green,
            "cloud" | "iac" => Color::Cyan,
            "containerization" | "orchestration" => Color::Blue,
            "monitoring" | "logging" | "visualization" => Color::Magenta,
            "security" => Color::Red,
            "programming" | "backend" | "database" => Color::Yellow,
            "frontend" | "full-stack" | "design" => Color::LightMagenta,
            _ => Color::LightBlue,
        };
        Style::default().fg(color)
    }
}

impl Default for PageStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_disables_colors() {
        assert!(!ColorConfig::from_env_and_args(true).colors_enabled());
    }

    #[test]
    fn disabled_colors_use_no_foreground() {
        let styles = PageStyles::with_color_config(ColorConfig::new(false));
        assert_eq!(styles.body.fg, None);
        assert_eq!(styles.category("DevOps"), Style::default());
    }

    #[test]
    fn categories_are_case_insensitive() {
        let styles = PageStyles::with_color_config(ColorConfig::new(true));
        assert_eq!(styles.category("devops"), styles.category("DevOps"));
        assert_eq!(styles.category("Cloud").fg, Some(Color::Cyan));
        assert_eq!(styles.category("Something else").fg, Some(Color::LightBlue));
    }

    #[test]
    fn entering_dims_the_base_style() {
        let styles = PageStyles::with_color_config(ColorConfig::new(true));
        let entering = styles.entering(styles.body);
        assert!(entering.add_modifier.contains(Modifier::DIM));
        assert_eq!(entering.fg, styles.body.fg);
    }
}
