mod cafeteria;
mod error;
pub use error::Error;
mod static_selector;
mod text_from_selection;

pub use cafeteria::{Extraction, MenuCatalog};
