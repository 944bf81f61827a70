pub mod catalog;
pub mod data;

pub use crate::domain::model::{ProjectEntry, SectionId};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::Result;
