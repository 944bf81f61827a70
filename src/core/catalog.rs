use crate::core::data;
use crate::domain::model::{ProjectEntry, SectionId};
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use serde::Serialize;
use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::new(data::sample_projects(), data::sample_sections()));

/// The ordered set of projects shown on the site, plus the page sections that frame them.
///
/// A `Catalog` has no mutation API. Changing content means editing the source
/// declaration (or the TOML data file) and rebuilding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    projects: Vec<ProjectEntry>,
    sections: Vec<SectionId>,
}

impl Catalog {
    /// Builds a catalog from authored data as-is. Run [`Catalog::lint`] to check it.
    pub fn new(projects: Vec<ProjectEntry>, sections: Vec<SectionId>) -> Self {
        Self { projects, sections }
    }

    /// The process-wide sample catalog, built on first access.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn list_projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    pub fn list_sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn find_project(&self, title: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.title == title)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Checks every authoring rule and collects all violations.
    pub fn lint(&self) -> LintReport {
        let mut violations = Vec::new();

        for entry in &self.projects {
            violations.extend(lint_entry(entry));
        }

        for title in validation::find_duplicates(self.projects.iter().map(|p| p.title.as_str())) {
            violations.push(CatalogError::DuplicateTitle {
                title: title.to_string(),
            });
        }

        for section in validation::find_duplicates(self.sections.iter().map(|s| s.as_str())) {
            violations.push(CatalogError::DuplicateSection {
                section: section.to_string(),
            });
        }

        for (index, section) in self.sections.iter().enumerate() {
            if section.as_str().trim().is_empty() {
                violations.push(CatalogError::EmptyLabel {
                    entry: "sections".to_string(),
                    field: "sections".to_string(),
                    index,
                });
            }
        }

        tracing::debug!(
            projects = self.projects.len(),
            sections = self.sections.len(),
            violations = violations.len(),
            "Catalog linted"
        );

        LintReport { violations }
    }
}

fn lint_entry(entry: &ProjectEntry) -> Vec<CatalogError> {
    let name = if entry.title.trim().is_empty() {
        "<untitled>"
    } else {
        entry.title.as_str()
    };

    [
        validation::validate_non_empty_string(name, "title", &entry.title),
        validation::validate_non_empty_string(name, "description", &entry.description),
        validation::validate_labels(name, "tech", &entry.tech),
        validation::validate_labels(name, "features", &entry.features),
        validation::validate_asset_path(name, &entry.image),
        validation::validate_url(name, &entry.github_link),
    ]
    .into_iter()
    .filter_map(|r| r.err())
    .collect()
}

impl CatalogSource for Catalog {
    fn list_projects(&self) -> &[ProjectEntry] {
        Catalog::list_projects(self)
    }

    fn list_sections(&self) -> &[SectionId] {
        Catalog::list_sections(self)
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        self.lint().into_result()
    }
}

/// Outcome of [`Catalog::lint`].
#[derive(Debug, Default)]
pub struct LintReport {
    violations: Vec<CatalogError>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[CatalogError] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<CatalogError> {
        self.violations
    }

    /// Fails with the first violation found, if any.
    pub fn into_result(self) -> Result<()> {
        match self.violations.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
