use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;
use std::path::{Component, Path};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(entry: &str, url_str: &str) -> Result<()> {
    let malformed = |reason: String| CatalogError::MalformedUrl {
        entry: entry.to_string(),
        value: url_str.to_string(),
        reason,
    };

    if url_str.trim().is_empty() {
        return Err(malformed("URL cannot be empty".to_string()));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" if url.has_host() => Ok(()),
            "http" | "https" => Err(malformed("URL has no host".to_string())),
            scheme => Err(malformed(format!("Unsupported URL scheme: {}", scheme))),
        },
        Err(e) => Err(malformed(format!("Invalid URL format: {}", e))),
    }
}

/// Only the shape of the reference is checked; whether the asset exists is up to the asset pipeline.
pub fn validate_asset_path(entry: &str, path: &str) -> Result<()> {
    let malformed = |reason: &str| CatalogError::MalformedAssetPath {
        entry: entry.to_string(),
        value: path.to_string(),
        reason: reason.to_string(),
    };

    if path.trim().is_empty() {
        return Err(malformed("Path cannot be empty"));
    }
    if !path.starts_with('/') {
        return Err(malformed("Path must be root-relative (start with '/')"));
    }
    if path.starts_with("//") {
        return Err(malformed("Protocol-relative URLs are not root-relative paths"));
    }
    if path.len() == 1 {
        return Err(malformed("Path does not name an asset"));
    }
    if path.contains('\0') {
        return Err(malformed("Path contains null bytes"));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    let invalid = |reason: &str| CatalogError::InvalidConfigValue {
        field: field_name.to_string(),
        value: path.to_string(),
        reason: reason.to_string(),
    };

    if path.trim().is_empty() {
        return Err(invalid("Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid("Path contains null bytes"));
    }
    Ok(())
}

/// A directory the packager writes into, relative to the project root.
pub fn validate_relative_dir(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    let invalid = |reason: &str| CatalogError::InvalidConfigValue {
        field: field_name.to_string(),
        value: path.to_string(),
        reason: reason.to_string(),
    };

    let p = Path::new(path);
    if p.is_absolute() || path.starts_with('/') || path.starts_with('\\') {
        return Err(invalid("Path must be relative to the project root"));
    }
    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(invalid("Path must not leave the project root"));
    }
    Ok(())
}

pub fn validate_non_empty_string(entry: &str, field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::MissingField {
            entry: entry.to_string(),
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_labels(entry: &str, field_name: &str, labels: &[String]) -> Result<()> {
    match labels.iter().position(|l| l.trim().is_empty()) {
        Some(index) => Err(CatalogError::EmptyLabel {
            entry: entry.to_string(),
            field: field_name.to_string(),
            index,
        }),
        None => Ok(()),
    }
}

pub fn validate_required_field<'a, T>(
    entry: &str,
    field_name: &str,
    value: &'a Option<T>,
) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CatalogError::MissingField {
        entry: entry.to_string(),
        field: field_name.to_string(),
    })
}

/// Returns every value that occurs more than once, in order of its second occurrence.
pub fn find_duplicates<'a, I>(values: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for value in values {
        if !seen.insert(value) && reported.insert(value) {
            duplicates.push(value);
        }
    }
    duplicates
}
