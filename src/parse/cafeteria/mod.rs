mod catalog;
mod extract;
mod menu_entry;

pub use catalog::MenuCatalog;
pub use extract::Extraction;
pub use menu_entry::MenuEntry;
