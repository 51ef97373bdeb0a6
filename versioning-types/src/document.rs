use crate::info::VersioningInformation;
use serde::{Deserialize, Serialize};

/// On-disk envelope for versioning information written by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersioningDocument<'a> {
    pub schema: String,
    pub versioning: VersioningInformation<'a>,
}

impl<'a> VersioningDocument<'a> {
    pub fn new(versioning: VersioningInformation<'a>) -> Self {
        Self {
            schema: crate::schema::VERSIONING_INFO_V1.to_string(),
            versioning,
        }
    }

    /// True when this crate understands the document's schema.
    pub fn is_supported(&self) -> bool {
        self.schema == crate::schema::VERSIONING_INFO_V1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_current_schema() {
        let doc = VersioningDocument::new(VersioningInformation::default());
        assert_eq!(doc.schema, crate::schema::VERSIONING_INFO_V1);
        assert!(doc.is_supported());
    }

    #[test]
    fn foreign_schema_is_unsupported() {
        let mut doc = VersioningDocument::new(VersioningInformation::default());
        doc.schema = "versioning.info.v2".to_string();
        assert!(!doc.is_supported());
    }
}
