use inksac::prelude::*;

/// Terminal styling for diagnostics and help hints. Falls back to plain text
/// when the terminal reports no color support.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter {
    color_support: ColorSupport,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        message.style(error_style).to_string()
    }

    pub fn hint(&self, hint: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        hint.style(hint_style).to_string()
    }
}
