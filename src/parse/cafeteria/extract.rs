use std::{borrow::Cow, fmt::Display, str::FromStr};

use scraper::ElementRef;
use tracing::{instrument, Level};

use super::menu_entry::MenuEntry;
use crate::parse::static_selector::StaticSelector;
use crate::parse::text_from_selection::{
    get_inner_text, optional_text_from_selection, text_from_selection,
};
use crate::{parse::Error, static_selector};

static_selector!(ITEM_SELECTOR <- "li.menu-list-item");
static_selector!(NAME_SELECTOR <- "h1.menu-list-item-entree-name");
static_selector!(SIDES_SELECTOR <- "span.menu-list-item-sides");
static_selector!(PRICE_SELECTOR <- "span.menu-list-item_price");

/// How the fields of each menu item are located in the document.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Extraction {
    /// The i-th name, sides and price anywhere in the document belong to the
    /// i-th menu item. Breaks (or silently shifts) when an item is missing a field.
    #[default]
    Positional,
    /// Each field is looked up inside its own menu item element.
    Scoped,
}

impl FromStr for Extraction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positional" => Ok(Self::Positional),
            "scoped" => Ok(Self::Scoped),
            other => Err(format!(
                "unknown extraction `{other}`, expected `positional` or `scoped`"
            )),
        }
    }
}

impl Display for Extraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positional => write!(f, "positional"),
            Self::Scoped => write!(f, "scoped"),
        }
    }
}

/// One entry per `li.menu-list-item` under `element`, in document order.
#[instrument(skip(element), level = Level::TRACE)]
pub fn extract_entries(
    element: ElementRef<'_>,
    extraction: Extraction,
) -> Result<Vec<MenuEntry<'_>>, Error> {
    match extraction {
        Extraction::Positional => positional_entries(element),
        Extraction::Scoped => scoped_entries(element),
    }
}

fn positional_entries(element: ElementRef<'_>) -> Result<Vec<MenuEntry<'_>>, Error> {
    let item_count = element.select(&ITEM_SELECTOR).count();
    let names: Vec<ElementRef> = element.select(&NAME_SELECTOR).collect();
    let sides: Vec<ElementRef> = element.select(&SIDES_SELECTOR).collect();
    let prices: Vec<ElementRef> = element.select(&PRICE_SELECTOR).collect();

    (0..item_count)
        .map(|index| {
            let name = nth_text(&names, index, &NAME_SELECTOR)?;
            let sides = nth_text(&sides, index, &SIDES_SELECTOR)?;
            let price = nth_text(&prices, index, &PRICE_SELECTOR)?;
            Ok::<_, Error>(MenuEntry::new(name, sides, price))
        })
        .collect()
}

fn nth_text<'a>(
    matches: &[ElementRef<'a>],
    index: usize,
    selector: &StaticSelector<'static>,
) -> Result<Cow<'a, str>, Error> {
    matches
        .get(index)
        .map(|element| get_inner_text(*element))
        .ok_or_else(|| Error::selector_mismatch(selector.source(), index, matches.len()))
}

fn scoped_entries(element: ElementRef<'_>) -> Result<Vec<MenuEntry<'_>>, Error> {
    element
        .select(&ITEM_SELECTOR)
        .map(|item| {
            let name = text_from_selection(&NAME_SELECTOR, item, "menu item", "entree name")?;
            let sides = optional_text_from_selection(&SIDES_SELECTOR, item).unwrap_or_default();
            let price = optional_text_from_selection(&PRICE_SELECTOR, item).unwrap_or_default();
            Ok::<_, Error>(MenuEntry::new(name, sides, price))
        })
        .collect()
}
