//! Colour detection and the markers used in the search report

use owo_colors::OwoColorize;

/// Whether colour escapes should be written to stdout
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    colored: bool,
}

impl Palette {
    pub const fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub const fn plain() -> Self {
        Self::new(false)
    }

    pub fn detect() -> Self {
        Self::new(supports_color())
    }

    /// green
    pub fn success(self, text: &str) -> String {
        if self.colored {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    /// red
    pub fn failure(self, text: &str) -> String {
        if self.colored {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    /// yellow
    pub fn prompt(self, text: &str) -> String {
        if self.colored {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_palette_leaves_text_alone() {
        let palette = Palette::plain();
        assert_eq!(palette.success("Name  : "), "Name  : ");
        assert_eq!(palette.failure("Doesn't Serve tofu"), "Doesn't Serve tofu");
        assert_eq!(palette.prompt("?"), "?");
    }

    #[test]
    fn test_colored_palette_wraps_in_escapes() {
        let palette = Palette::new(true);
        assert_eq!(palette.success("ok"), "\u{1b}[32mok\u{1b}[39m");
        assert_eq!(palette.failure("no"), "\u{1b}[31mno\u{1b}[39m");
        assert_eq!(palette.prompt("?"), "\u{1b}[33m?\u{1b}[39m");
    }
}
