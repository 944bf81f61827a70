pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::app::commands::ExportFormat;
pub use crate::config::{catalog_file::CatalogFile, deploy::DeploymentDescriptor};
pub use crate::core::catalog::{Catalog, LintReport};
pub use crate::domain::model::{ProjectEntry, SectionId};
pub use crate::domain::ports::CatalogSource;
pub use crate::utils::error::{CatalogError, Result};
