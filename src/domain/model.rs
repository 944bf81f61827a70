use serde::{Deserialize, Serialize};
use std::fmt;

/// One showcased project, as the rendering layer displays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    /// Display order is insertion order.
    pub tech: Vec<String>,
    pub features: Vec<String>,
    /// Root-relative asset reference, e.g. `/website.png`.
    pub image: String,
    #[serde(rename = "githubLink")]
    pub github_link: String,
}

impl ProjectEntry {
    pub fn new(
        title: &str,
        description: &str,
        tech: &[&str],
        features: &[&str],
        image: &str,
        github_link: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            tech: tech.iter().map(|s| s.to_string()).collect(),
            features: features.iter().map(|s| s.to_string()).collect(),
            image: image.to_string(),
            github_link: github_link.to_string(),
        }
    }
}

/// Identifier of a navigable page region. Order of ids is scroll order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<&str> for SectionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
