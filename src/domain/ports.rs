use crate::domain::model::{ProjectEntry, SectionId};

/// Read-only view the rendering layer consumes.
pub trait CatalogSource: Send + Sync {
    fn list_projects(&self) -> &[ProjectEntry];
    fn list_sections(&self) -> &[SectionId];
}
