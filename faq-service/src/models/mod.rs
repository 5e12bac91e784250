pub mod faq;

pub use faq::{CatalogError, FaqCatalog, FaqEntry};
