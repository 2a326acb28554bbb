use std::sync::OnceLock;

use scraper::Selector;

#[derive(Debug)]
pub(super) struct StaticSelector<'a> {
    cell: OnceLock<Selector>,
    selector: &'a str,
}

impl<'a> StaticSelector<'a> {
    pub(super) const fn new(selector: &'a str) -> Self {
        Self {
            cell: OnceLock::new(),
            selector,
        }
    }

    /// the css text this selector was built from, used in error messages
    pub(super) const fn source(&self) -> &'a str {
        self.selector
    }
}

impl core::ops::Deref for StaticSelector<'_> {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.cell
            .get_or_init(|| match Selector::parse(self.selector) {
                Ok(sel) => sel,
                Err(e) => panic!("Error parsing static selector {}: {:?}", self.selector, e),
            })
    }
}

#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    #[test]
    fn test_selector_is_compiled_lazily_and_reused() {
        static_selector!(HEADING_SELECTOR <- "h1.title");
        assert_eq!(HEADING_SELECTOR.source(), "h1.title");

        let doc = Html::parse_document("<h1 class=title>a</h1><h1>b</h1><h1 class=title>c</h1>");
        assert_eq!(doc.select(&HEADING_SELECTOR).count(), 2);
        // second deref hits the cached selector
        assert_eq!(doc.root_element().select(&HEADING_SELECTOR).count(), 2);
    }
}
