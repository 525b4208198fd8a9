//! Usage information shown for a documented entity at design time

use serde::Serialize;

/// Summary and remarks of one documented type or property
///
/// Equality and hashing are ordinal over both fields, and an absent field is
/// distinct from an empty one. A descriptor always carries at least one
/// non-empty field; "nothing documented" is expressed as `None` by
/// [`UsageDescriptor::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UsageDescriptor {
    summary: Option<String>,
    remarks: Option<String>,
}

impl UsageDescriptor {
    /// Create a descriptor, or `None` when neither field has any text
    pub fn new(summary: Option<String>, remarks: Option<String>) -> Option<Self> {
        let has_text =
            |field: &Option<String>| field.as_deref().is_some_and(|text| !text.is_empty());
        if !has_text(&summary) && !has_text(&remarks) {
            return None;
        }
        Some(Self { summary, remarks })
    }

    /// A summary on how to use the entity
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Remarks on how to use the entity
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }
}
