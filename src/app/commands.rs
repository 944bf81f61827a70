use crate::config::catalog_file::CatalogFile;
use crate::config::deploy::DeploymentDescriptor;
use crate::core::catalog::Catalog;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;
use std::borrow::Cow;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ExportFormat {
    Json,
    Toml,
}

/// The built-in catalog, or the one authored in `path`.
pub fn load_catalog(path: Option<&Path>) -> Result<Cow<'static, Catalog>> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading catalog from {}", path.display());
            Ok(Cow::Owned(CatalogFile::from_file(path)?.into_catalog()?))
        }
        None => {
            tracing::debug!("Using built-in catalog");
            Ok(Cow::Borrowed(Catalog::builtin()))
        }
    }
}

pub fn load_descriptor(path: Option<&Path>) -> Result<DeploymentDescriptor> {
    match path {
        Some(path) => {
            tracing::info!("📁 Loading deployment descriptor from {}", path.display());
            DeploymentDescriptor::from_file(path)
        }
        None => Ok(DeploymentDescriptor::sample()),
    }
}

/// Violations found across the catalog and the deployment descriptor.
#[derive(Debug, Default)]
pub struct LintOutcome {
    pub projects_checked: usize,
    pub sections_checked: usize,
    pub violations: Vec<CatalogError>,
}

impl LintOutcome {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Loads and checks both inputs, collecting every violation. Missing fields in
/// a data file are violations; unreadable or unparsable files are errors.
pub fn lint(catalog_path: Option<&Path>, deploy_path: Option<&Path>) -> Result<LintOutcome> {
    let mut outcome = LintOutcome::default();

    let catalog = match catalog_path {
        Some(path) => {
            tracing::info!("📁 Loading catalog from {}", path.display());
            let file = CatalogFile::from_file(path)?;
            outcome.projects_checked = file.projects.len();
            // 不完整的項目先記錄缺少欄位，其餘照常檢查
            let (catalog, missing) = file.into_parts();
            outcome.violations.extend(missing);
            Cow::Owned(catalog)
        }
        None => {
            outcome.projects_checked = Catalog::builtin().len();
            Cow::Borrowed(Catalog::builtin())
        }
    };
    outcome.sections_checked = catalog.list_sections().len();
    outcome.violations.extend(catalog.lint().into_violations());

    let descriptor = load_descriptor(deploy_path)?;
    if let Err(e) = descriptor.validate() {
        outcome.violations.push(e);
    }

    for violation in &outcome.violations {
        tracing::warn!("{}", violation);
    }
    tracing::info!(
        "Checked {} project(s), {} section(s): {} violation(s)",
        outcome.projects_checked,
        outcome.sections_checked,
        outcome.violations.len()
    );

    Ok(outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DescriptorFormat {
    /// Just the output directory
    Plain,
    Toml,
}

pub fn describe(descriptor: &DeploymentDescriptor, format: DescriptorFormat) -> Result<String> {
    match format {
        DescriptorFormat::Plain => Ok(descriptor.output_directory().to_string()),
        DescriptorFormat::Toml => descriptor.to_toml_string(),
    }
}

pub fn export(catalog: &Catalog, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(catalog)?),
        ExportFormat::Toml => CatalogFile::from_catalog(catalog).to_toml_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_lint_builtin_is_clean() {
        let outcome = lint(None, None).unwrap();
        assert!(outcome.is_clean());
        assert_eq!(outcome.projects_checked, 5);
        assert_eq!(outcome.sections_checked, 4);
    }

    #[test]
    fn test_lint_reports_missing_field_as_violation() {
        let catalog = temp_with(
            r#"
sections = ["hero"]

[[projects]]
title = "Half"
description = "Only half written"
tech = []
features = []
"#,
        );
        let outcome = lint(Some(catalog.path()), None).unwrap();
        assert_eq!(outcome.projects_checked, 1);
        assert_eq!(outcome.violations.len(), 2);
        assert!(outcome
            .violations
            .iter()
            .all(|e| matches!(e, CatalogError::MissingField { entry, .. } if entry == "Half")));
    }

    #[test]
    fn test_lint_data_file_collects_all_violations() {
        let catalog = temp_with(
            r#"
sections = ["hero", "hero"]

[[projects]]
title = "A"
tech = ["Rust"]

[[projects]]
title = "B"
description = "Missing its links"
tech = []
features = []

[[projects]]
title = "C"
description = "Broken in several ways"
tech = ["Java", ""]
features = []
image = "nope.png"
githubLink = "not a url"

[[projects]]
title = "C"
description = "Same title again"
tech = ["Java"]
features = []
image = "/c.png"
githubLink = "https://github.com/example/c"
"#,
        );
        let outcome = lint(Some(catalog.path()), None).unwrap();
        assert_eq!(outcome.projects_checked, 4);

        let count = |pred: fn(&CatalogError) -> bool| {
            outcome.violations.iter().filter(|e| pred(e)).count()
        };
        // A: description, features, image, githubLink; B: image, githubLink
        assert_eq!(count(|e| matches!(e, CatalogError::MissingField { .. })), 6);
        assert_eq!(count(|e| matches!(e, CatalogError::DuplicateSection { .. })), 1);
        assert_eq!(count(|e| matches!(e, CatalogError::DuplicateTitle { .. })), 1);
        assert_eq!(count(|e| matches!(e, CatalogError::EmptyLabel { .. })), 1);
        assert_eq!(count(|e| matches!(e, CatalogError::MalformedAssetPath { .. })), 1);
        assert_eq!(count(|e| matches!(e, CatalogError::MalformedUrl { .. })), 1);
        assert_eq!(outcome.violations.len(), 11);
    }

    #[test]
    fn test_lint_reports_bad_descriptor() {
        let deploy = temp_with(r#"outputDirectory = "/abs/path""#);
        let outcome = lint(None, Some(deploy.path())).unwrap();
        assert!(matches!(
            outcome.violations.as_slice(),
            [CatalogError::InvalidConfigValue { .. }]
        ));
    }

    #[test]
    fn test_lint_unparsable_file_is_error() {
        let catalog = temp_with("[[projects]\ntitle = ");
        let err = lint(Some(catalog.path()), None).unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn test_describe_descriptor() {
        let descriptor = DeploymentDescriptor::sample();
        assert_eq!(describe(&descriptor, DescriptorFormat::Plain).unwrap(), "vercel");

        let toml_text = describe(&descriptor, DescriptorFormat::Toml).unwrap();
        assert_eq!(toml_text.trim(), r#"outputDirectory = "vercel""#);
        assert_eq!(DeploymentDescriptor::from_toml_str(&toml_text).unwrap(), descriptor);
    }

    #[test]
    fn test_json_export_shape() {
        let json = export(Catalog::builtin(), ExportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["projects"].as_array().unwrap().len(), 5);
        assert_eq!(value["projects"][0]["title"], "This Website");
        assert_eq!(
            value["projects"][4]["githubLink"],
            "https://github.com/lumijiez"
        );
        assert_eq!(
            value["sections"],
            serde_json::json!(["hero", "about", "projects", "contact"])
        );
    }

    #[test]
    fn test_toml_export_is_loadable() {
        let toml_text = export(Catalog::builtin(), ExportFormat::Toml).unwrap();
        let file = temp_with(&toml_text);
        let catalog = load_catalog(Some(file.path())).unwrap();
        assert_eq!(catalog.as_ref(), Catalog::builtin());
    }
}
