//! Visual theme and styling.

use console::Style;

/// Gantry's visual theme.
#[derive(Debug, Clone)]
pub struct GantryTheme {
    /// Style for success lines (green).
    pub success: Style,
    /// Style for warning lines (orange).
    pub warning: Style,
    /// Style for issue lines (red bold).
    pub error: Style,
    /// Style for section headers (cyan bold).
    pub header: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
}

impl Default for GantryTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GantryTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().cyan().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success line (icon + text).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning line (icon + text).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an issue line (icon + text).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a section header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a progress line.
    pub fn format_progress(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(msg))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Honor NO_COLOR (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
