//! Localized UI strings.
//!
//! The table is loaded once at startup from a `MessageCatalog` and passed by
//! reference to whatever renders text. Nothing mutates it afterwards.

mod catalog;
mod table;

pub use catalog::{CatalogError, JsonCatalog, MessageCatalog};
pub use table::{Translations, I18N_KEYS};
