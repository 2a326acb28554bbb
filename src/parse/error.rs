use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    HtmlParse(String),
    /// positional extraction wanted match `index` of `selector` but only `found` exist
    SelectorMismatch {
        selector: &'static str,
        index: usize,
        found: usize,
    },
}

impl Error {
    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }

    pub const fn selector_mismatch(selector: &'static str, index: usize, found: usize) -> Self {
        Self::SelectorMismatch {
            selector,
            index,
            found,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "HTML Parse Error: {msg}"),
            Self::SelectorMismatch {
                selector,
                index,
                found,
            } => write!(
                f,
                "Selector Mismatch Error: no match at index {index} for `{selector}` ({found} found)"
            ),
        }
    }
}

impl std::error::Error for Error {}
