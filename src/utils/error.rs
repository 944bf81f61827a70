use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to parse {source_name}: {message}")]
    ParseError { source_name: String, message: String },

    #[error("Entry '{entry}' is missing required field '{field}'")]
    MissingField { entry: String, field: String },

    #[error("Duplicate project title: '{title}'")]
    DuplicateTitle { title: String },

    #[error("Entry '{entry}' has malformed githubLink '{value}': {reason}")]
    MalformedUrl {
        entry: String,
        value: String,
        reason: String,
    },

    #[error("Entry '{entry}' has malformed image path '{value}': {reason}")]
    MalformedAssetPath {
        entry: String,
        value: String,
        reason: String,
    },

    #[error("Entry '{entry}' has an empty label in '{field}' at position {index}")]
    EmptyLabel {
        entry: String,
        field: String,
        index: usize,
    },

    #[error("Duplicate section id: '{section}'")]
    DuplicateSection { section: String },

    #[error("Invalid value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A defect in the authored catalog data.
    Content,
    /// A defect in the deployment descriptor or another config value.
    Configuration,
    /// The source file could not be read or decoded.
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::IoError(_)
            | CatalogError::SerializationError(_)
            | CatalogError::ParseError { .. } => ErrorCategory::Input,
            CatalogError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            _ => ErrorCategory::Content,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CatalogError::IoError(_) => ErrorSeverity::Critical,
            CatalogError::SerializationError(_) | CatalogError::ParseError { .. } => {
                ErrorSeverity::High
            }
            CatalogError::MalformedAssetPath { .. } | CatalogError::EmptyLabel { .. } => {
                ErrorSeverity::Medium
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not read the input file: {}", e),
            CatalogError::ParseError { source_name, .. } => {
                format!("'{}' is not a valid data file", source_name)
            }
            CatalogError::MissingField { entry, field } => {
                format!("Project '{}' needs a '{}' value", entry, field)
            }
            CatalogError::DuplicateTitle { title } => {
                format!("Two projects are both titled '{}'", title)
            }
            CatalogError::MalformedUrl { entry, value, .. } => {
                format!("Project '{}' links to '{}', which is not a web URL", entry, value)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => "Check that the file exists and is readable",
            CatalogError::SerializationError(_) | CatalogError::ParseError { .. } => {
                "Fix the syntax of the data file and run the lint again"
            }
            CatalogError::MissingField { .. } => "Add the missing field to the project entry",
            CatalogError::DuplicateTitle { .. } => "Give every project a distinct title",
            CatalogError::MalformedUrl { .. } => "Use an absolute http:// or https:// link",
            CatalogError::MalformedAssetPath { .. } => {
                "Reference images root-relative, e.g. /website.png"
            }
            CatalogError::EmptyLabel { .. } => "Remove empty strings from tech and features",
            CatalogError::DuplicateSection { .. } => "List every section id only once",
            CatalogError::InvalidConfigValue { .. } => {
                "Correct the configuration value and rebuild"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
