use inksac::prelude::*;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color_support: ColorSupport,
}

impl Painter {
    /// Never emits escape sequences.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    /// Colours only when `stream` is a terminal that inksac thinks can show them.
    pub fn detect(stream: &impl IsTerminal) -> Self {
        if !stream.is_terminal() {
            return Self::plain();
        }
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn error(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        text.style(error_style).to_string()
    }

    pub fn heading(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }

        let heading_style = Style::builder().bold().build();
        text.style(heading_style).to_string()
    }
}
