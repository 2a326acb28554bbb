use std::borrow::Cow;

use super::Error;
use scraper::{ElementRef, Selector};

/// text of the first descendant of `element` matching `selector`.
/// Errors if nothing matches.
pub fn text_from_selection<'a>(
    selector: &Selector,
    element: ElementRef<'a>,
    parent_label: &str,
    child_label: &str,
) -> Result<Cow<'a, str>, Error> {
    optional_text_from_selection(selector, element).ok_or_else(|| {
        Error::html_parse_error(&format!(
            "Every {parent_label} element should have a {child_label}."
        ))
    })
}

pub fn optional_text_from_selection<'a>(
    selector: &Selector,
    element: ElementRef<'a>,
) -> Option<Cow<'a, str>> {
    element.select(selector).next().map(get_inner_text)
}

/// All descendant text nodes joined exactly as written, whitespace included.
/// Borrows from the document when the element holds a single text node.
pub fn get_inner_text(element: ElementRef<'_>) -> Cow<'_, str> {
    let mut text_iter = element.text();
    let Some(first) = text_iter.next() else {
        return Cow::Borrowed("");
    };
    let Some(second) = text_iter.next() else {
        return Cow::Borrowed(first);
    };

    let mut joined = String::from(first);
    joined.push_str(second);
    text_iter.for_each(|t| joined.push_str(t));
    Cow::Owned(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_selector;
    use scraper::Html;

    #[test]
    fn test_single_text_node_is_borrowed() {
        static_selector!(SPAN_SELECTOR <- "span");
        let doc = Html::parse_document("<p><span>  Rice, Beans </span></p>");
        let text = optional_text_from_selection(&SPAN_SELECTOR, doc.root_element())
            .expect("span is present");
        assert!(matches!(text, Cow::Borrowed("  Rice, Beans ")));
    }

    #[test]
    fn test_nested_text_nodes_are_joined() {
        static_selector!(HEADING_SELECTOR <- "h1");
        let doc = Html::parse_document("<h1>\n  Grilled <em>Chicken</em>\n</h1>");
        let text = text_from_selection(&HEADING_SELECTOR, doc.root_element(), "page", "heading")
            .expect("heading is present");
        assert_eq!(text, "\n  Grilled Chicken\n");
    }

    #[test]
    fn test_whitespace_only_text_is_kept() {
        static_selector!(SPAN_SELECTOR <- "span");
        let doc = Html::parse_document("<span> \n </span>");
        let text = optional_text_from_selection(&SPAN_SELECTOR, doc.root_element());
        assert_eq!(text.as_deref(), Some(" \n "));
    }

    #[test]
    fn test_empty_element_has_empty_text() {
        static_selector!(SPAN_SELECTOR <- "span");
        let doc = Html::parse_document("<span></span>");
        let text = optional_text_from_selection(&SPAN_SELECTOR, doc.root_element());
        assert_eq!(text.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_child_is_an_error() {
        static_selector!(PRICE_SELECTOR <- "span.price");
        let doc = Html::parse_document("<li><span>no price here</span></li>");
        let err = text_from_selection(&PRICE_SELECTOR, doc.root_element(), "menu item", "price")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "HTML Parse Error: Every menu item element should have a price."
        );
    }
}
