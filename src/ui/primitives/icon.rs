use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Setup,
    Clean,
    Package,
    Done,
    Sparkles,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Setup) => theme::icons::SETUP,
            (true, Icon::Clean) => theme::icons::CLEAN,
            (true, Icon::Package) => theme::icons::PACKAGE,
            (true, Icon::Done) => theme::icons::DONE,
            (true, Icon::Sparkles) => theme::icons::SPARKLES,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Setup) => theme::icons_ascii::SETUP,
            (false, Icon::Clean) => theme::icons_ascii::CLEAN,
            (false, Icon::Package) => theme::icons_ascii::PACKAGE,
            (false, Icon::Done) => theme::icons_ascii::DONE,
            (false, Icon::Sparkles) => theme::icons_ascii::SPARKLES,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Done | Icon::Sparkles => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Progress | Icon::Setup | Icon::Clean | Icon::Package => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_renders_ascii_when_unicode_unsupported() {
        assert_eq!(Icon::Success.render(false), theme::icons_ascii::SUCCESS);
        assert_eq!(Icon::Package.render(false), "[PACKAGE]");
    }

    #[test]
    fn icon_renders_unicode_when_supported() {
        assert_eq!(Icon::Warning.render(true), theme::icons::WARNING);
    }

    #[test]
    fn colored_without_color_is_plain() {
        assert_eq!(Icon::Error.colored(false, true), "✗");
    }
}
