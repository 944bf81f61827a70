use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "vercel";

/// Build-time settings for the hosting adapter's packaging step.
///
/// `outputDirectory` is the only recognized option; anything else in the
/// source document is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DeploymentDescriptor {
    pub output_directory: String,
}

impl DeploymentDescriptor {
    pub fn new(output_directory: impl Into<String>) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    /// The descriptor the site ships with.
    pub fn sample() -> Self {
        Self::new(DEFAULT_OUTPUT_DIRECTORY)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let descriptor = Self::parse(&content, &path.display().to_string())?;
        tracing::debug!(
            "Loaded deployment descriptor from {} (outputDirectory = {})",
            path.display(),
            descriptor.output_directory
        );
        Ok(descriptor)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "deployment descriptor")
    }

    fn parse(content: &str, source_name: &str) -> Result<Self> {
        let processed = super::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| CatalogError::ParseError {
            source_name: source_name.to_string(),
            message: e.message().to_string(),
        })
    }

    pub fn output_directory(&self) -> &str {
        &self.output_directory
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| CatalogError::ParseError {
            source_name: "deployment descriptor".to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for DeploymentDescriptor {
    fn default() -> Self {
        Self::sample()
    }
}

impl Validate for DeploymentDescriptor {
    fn validate(&self) -> Result<()> {
        validation::validate_relative_dir("outputDirectory", &self.output_directory)
    }
}
