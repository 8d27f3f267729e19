//! Styled output helpers for the diagnostic stream.

use console::style;

/// Render a diagnostic message, in yellow when `color` is set.
///
/// The text is unchanged either way so piped output stays greppable.
#[must_use]
pub fn diagnostic(message: &str, color: bool) -> String {
    if color {
        style(message).yellow().force_styling(true).to_string()
    } else {
        message.to_string()
    }
}

/// Whether diagnostics on stderr should be colored.
#[must_use]
pub fn stderr_supports_color() -> bool {
    console::colors_enabled_stderr()
}
