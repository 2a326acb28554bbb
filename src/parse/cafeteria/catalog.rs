use std::{io::Write, slice::Iter};

use scraper::ElementRef;

use super::extract::{extract_entries, Extraction};
use super::menu_entry::MenuEntry;
use crate::parse::Error;
use crate::terminal::Palette;

/// Every menu item of one page, in document order. Duplicate names are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuCatalog<'a> {
    entries: Vec<MenuEntry<'a>>,
}

impl<'a> From<Vec<MenuEntry<'a>>> for MenuCatalog<'a> {
    fn from(entries: Vec<MenuEntry<'a>>) -> Self {
        Self { entries }
    }
}

impl<'s, 'a> IntoIterator for &'s MenuCatalog<'a> {
    type Item = &'s MenuEntry<'a>;
    type IntoIter = Iter<'s, MenuEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> MenuCatalog<'a> {
    pub fn from_html_element(
        element: ElementRef<'a>,
        extraction: Extraction,
    ) -> Result<Self, Error> {
        extract_entries(element, extraction).map(Self::from)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, MenuEntry<'a>> {
        self.entries.iter()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.iter().any(|entry| entry.matches(term))
    }

    pub fn matching<'s>(
        &'s self,
        term: &'s str,
    ) -> impl Iterator<Item = &'s MenuEntry<'a>> + 's {
        self.entries.iter().filter(move |entry| entry.matches(term))
    }

    /// Writes every matching entry as a labelled block, or a single
    /// "Doesn't Serve" line when nothing matches. Returns how many entries were written.
    pub fn search_and_report(
        &self,
        term: &str,
        out: &mut impl Write,
        palette: Palette,
    ) -> crate::Result<usize> {
        if !self.contains(term) {
            writeln!(out, "{}", palette.failure(&format!("Doesn't Serve {term}")))?;
            return Ok(0);
        }

        let mut reported = 0;
        for entry in self.matching(term) {
            writeln!(out)?;
            writeln!(
                out,
                "{}{}",
                palette.success("Name  : "),
                entry.name().to_uppercase()
            )?;
            writeln!(out, "{}{}", palette.success("Sides : "), entry.sides())?;
            writeln!(out, "{}{}", palette.success("Price : "), entry.price())?;
            writeln!(out)?;
            reported += 1;
        }
        Ok(reported)
    }

    /// Same selection as [`Self::search_and_report`], written as a JSON array.
    pub fn search_and_report_json(
        &self,
        term: &str,
        out: &mut impl Write,
    ) -> crate::Result<usize> {
        let matches: Vec<&MenuEntry> = self.matching(term).collect();
        serde_json::to_writer_pretty(&mut *out, &matches)?;
        writeln!(out)?;
        Ok(matches.len())
    }
}
