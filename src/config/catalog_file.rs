use crate::core::catalog::Catalog;
use crate::domain::model::{ProjectEntry, SectionId};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::validate_required_field;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML data file holding an authored catalog:
///
/// ```toml
/// sections = ["hero", "about", "projects", "contact"]
///
/// [[projects]]
/// title = "Wirestream"
/// description = "From-scratch Java WebAPI framework, inspired by Express.js"
/// tech = ["Java", "Pure Java"]
/// features = ["HTTP/S", "WebSocket"]
/// image = "/wirestream.png"
/// githubLink = "https://github.com/lumijiez/wirestream"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    #[serde(default)]
    pub sections: Vec<SectionId>,
    #[serde(default)]
    pub projects: Vec<RawProjectEntry>,
}

/// A project table as authored. Fields are optional here so that a missing
/// one surfaces as [`CatalogError::MissingField`] naming the entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProjectEntry {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub image: Option<String>,
    #[serde(rename = "githubLink")]
    pub github_link: Option<String>,
}

impl RawProjectEntry {
    fn display_name(&self, position: usize) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("#{}", position + 1),
        }
    }

    fn missing_fields(&self, name: &str) -> Vec<CatalogError> {
        [
            validate_required_field(name, "title", &self.title).err(),
            validate_required_field(name, "description", &self.description).err(),
            validate_required_field(name, "tech", &self.tech).err(),
            validate_required_field(name, "features", &self.features).err(),
            validate_required_field(name, "image", &self.image).err(),
            validate_required_field(name, "githubLink", &self.github_link).err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn into_entry(self, position: usize) -> std::result::Result<ProjectEntry, Vec<CatalogError>> {
        match self {
            RawProjectEntry {
                title: Some(title),
                description: Some(description),
                tech: Some(tech),
                features: Some(features),
                image: Some(image),
                github_link: Some(github_link),
            } => Ok(ProjectEntry {
                title,
                description,
                tech,
                features,
                image,
                github_link,
            }),
            incomplete => Err(incomplete.missing_fields(&incomplete.display_name(position))),
        }
    }
}

impl From<&ProjectEntry> for RawProjectEntry {
    fn from(entry: &ProjectEntry) -> Self {
        Self {
            title: Some(entry.title.clone()),
            description: Some(entry.description.clone()),
            tech: Some(entry.tech.clone()),
            features: Some(entry.features.clone()),
            image: Some(entry.image.clone()),
            github_link: Some(entry.github_link.clone()),
        }
    }
}

impl CatalogFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file = Self::parse(&content, &path.display().to_string())?;
        tracing::debug!(
            "Loaded {} project(s) and {} section(s) from {}",
            file.projects.len(),
            file.sections.len(),
            path.display()
        );
        Ok(file)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "catalog data")
    }

    fn parse(content: &str, source_name: &str) -> Result<Self> {
        // 內容原樣載入，不做環境變數替換
        toml::from_str(content).map_err(|e| CatalogError::ParseError {
            source_name: source_name.to_string(),
            message: e.message().to_string(),
        })
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            sections: catalog.list_sections().to_vec(),
            projects: catalog.list_projects().iter().map(RawProjectEntry::from).collect(),
        }
    }

    /// Splits the file into a catalog of its complete entries, in declaration
    /// order, and a `MissingField` for every field absent from the others.
    pub fn into_parts(self) -> (Catalog, Vec<CatalogError>) {
        let mut projects = Vec::with_capacity(self.projects.len());
        let mut missing = Vec::new();

        for (position, raw) in self.projects.into_iter().enumerate() {
            match raw.into_entry(position) {
                Ok(entry) => projects.push(entry),
                Err(errors) => missing.extend(errors),
            }
        }

        (Catalog::new(projects, self.sections), missing)
    }

    /// Fails with the first missing field, if any entry is incomplete.
    pub fn into_catalog(self) -> Result<Catalog> {
        let (catalog, missing) = self.into_parts();
        match missing.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(catalog),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CatalogError::ParseError {
            source_name: "catalog data".to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL: &str = r#"
sections = ["hero", "projects"]

[[projects]]
title = "Wirestream"
description = "From-scratch Java WebAPI framework"
tech = ["Java", "Pure Java"]
features = ["HTTP/S", "WebSocket"]
image = "/wirestream.png"
githubLink = "https://github.com/lumijiez/wirestream"

[[projects]]
title = "Raven"
description = "Security-focused chat application"
tech = ["Java"]
features = []
image = "/raven.png"
githubLink = "https://github.com/lumijiez/raven"
"#;

    #[test]
    fn test_parse_catalog_file() {
        let catalog = CatalogFile::from_toml_str(SMALL).unwrap().into_catalog().unwrap();

        let titles: Vec<_> = catalog.list_projects().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Wirestream", "Raven"]);
        assert_eq!(catalog.list_sections(), &["hero", "projects"]);
        assert!(catalog.list_projects()[1].features.is_empty());
        assert!(catalog.lint().is_clean());
    }

    #[test]
    fn test_missing_field_names_entry() {
        let toml_content = r#"
[[projects]]
title = "Bugger"
description = "2D shooter"
tech = ["Java"]
features = ["GL shaders"]
image = "/bugger.png"
"#;
        let err = CatalogFile::from_toml_str(toml_content)
            .unwrap()
            .into_catalog()
            .unwrap_err();
        match err {
            CatalogError::MissingField { entry, field } => {
                assert_eq!(entry, "Bugger");
                assert_eq!(field, "githubLink");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_untitled_entry_uses_position() {
        let toml_content = r#"
[[projects]]
description = "No title here"
"#;
        let err = CatalogFile::from_toml_str(toml_content)
            .unwrap()
            .into_catalog()
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingField { ref entry, ref field } if entry == "#1" && field == "title"
        ));
    }

    #[test]
    fn test_into_parts_reports_every_missing_field() {
        let toml_content = r#"
[[projects]]
title = "A"
tech = []

[[projects]]
title = "Complete"
description = "Nothing missing"
tech = ["Rust"]
features = []
image = "/complete.png"
githubLink = "https://github.com/example/complete"

[[projects]]
description = "No title, no links"
tech = []
features = []
"#;
        let (catalog, missing) = CatalogFile::from_toml_str(toml_content)
            .unwrap()
            .into_parts();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list_projects()[0].title, "Complete");

        let fields: Vec<(String, String)> = missing
            .iter()
            .map(|e| match e {
                CatalogError::MissingField { entry, field } => (entry.clone(), field.clone()),
                other => panic!("unexpected error: {:?}", other),
            })
            .collect();
        let expected = [
            ("A", "description"),
            ("A", "features"),
            ("A", "image"),
            ("A", "githubLink"),
            ("#3", "title"),
            ("#3", "image"),
            ("#3", "githubLink"),
        ];
        assert_eq!(fields.len(), expected.len());
        for ((entry, field), (want_entry, want_field)) in fields.iter().zip(expected) {
            assert_eq!(entry, want_entry);
            assert_eq!(field, want_field);
        }
    }

    #[test]
    fn test_placeholders_in_content_are_kept() {
        std::env::set_var("PORTFOLIO_CONTENT_VAR", "REPLACED");
        let toml_content = r#"
[[projects]]
title = "Templates"
description = "Supports ${PORTFOLIO_CONTENT_VAR} placeholders"
tech = ["${PORTFOLIO_CONTENT_VAR}"]
features = []
image = "/templates.png"
githubLink = "https://github.com/example/templates"
"#;
        let catalog = CatalogFile::from_toml_str(toml_content)
            .unwrap()
            .into_catalog()
            .unwrap();
        std::env::remove_var("PORTFOLIO_CONTENT_VAR");

        let entry = &catalog.list_projects()[0];
        assert_eq!(entry.description, "Supports ${PORTFOLIO_CONTENT_VAR} placeholders");
        assert_eq!(entry.tech, vec!["${PORTFOLIO_CONTENT_VAR}"]);
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let toml_content = r#"
[[projects]]
title = "x"
stars = 5
"#;
        assert!(matches!(
            CatalogFile::from_toml_str(toml_content),
            Err(CatalogError::ParseError { .. })
        ));
    }

    #[test]
    fn test_builtin_export_reloads_identically() {
        let exported = CatalogFile::from_catalog(Catalog::builtin())
            .to_toml_string()
            .unwrap();
        assert!(exported.contains("githubLink"));

        let reloaded = CatalogFile::from_toml_str(&exported)
            .unwrap()
            .into_catalog()
            .unwrap();
        assert_eq!(&reloaded, Catalog::builtin());
    }

    #[test]
    fn test_catalog_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SMALL.as_bytes()).unwrap();

        let catalog = CatalogFile::from_file(temp_file.path())
            .unwrap()
            .into_catalog()
            .unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CatalogFile::from_file("/definitely/not/here/catalog.toml").unwrap_err();
        assert!(matches!(err, CatalogError::IoError(_)));
    }
}
