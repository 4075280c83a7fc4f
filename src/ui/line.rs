//! Single-line rendering of reporter messages

use crate::domain::ports::Level;
use crate::ui::primitives::{ColoredText, Icon};

/// Render one reporter message as a terminal line (without newline).
///
/// Headings are bold with no icon; details are indented under an arrow.
pub fn format_line(level: Level, message: &str, color: bool, unicode: bool) -> String {
    let (icon, text) = match level {
        Level::Heading => return ColoredText::info(message).bold().render(color),
        Level::Success => (Icon::Success, ColoredText::plain(message)),
        Level::Info => (Icon::Progress, ColoredText::plain(message)),
        Level::Warning => (Icon::Warning, ColoredText::warning(message)),
        Level::Error => (Icon::Error, ColoredText::error(message)),
        Level::Detail => {
            return format!(
                "  {} {}",
                Icon::Arrow.colored(color, unicode),
                ColoredText::dim(message).render(color)
            )
        }
    };
    format!("{} {}", icon.colored(color, unicode), text.render(color))
}
