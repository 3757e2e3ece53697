/// A directed connection between two blocks.
///
/// Edges are only ever created through `Project::connect`, which applies the
/// connection validity rules. Handles disambiguate which of the two required
/// inputs a comparison block receives.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: Option<String>,
    pub target_handle: Option<String>,
}

impl Edge {
    pub fn new(id: &str, source: &str, target: &str) -> Self {
        Self {
            id: id.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            source_handle: None,
            target_handle: None,
        }
    }

    pub fn with_handles(mut self, source_handle: &str, target_handle: &str) -> Self {
        self.source_handle = Some(source_handle.to_string());
        self.target_handle = Some(target_handle.to_string());
        self
    }

    /// Parses the trailing slot index from a handle identifier such as
    /// `input-1`. Returns `None` when the handle is absent or carries no
    /// parseable index.
    pub fn target_slot(&self) -> Option<u32> {
        let handle = self.target_handle.as_deref()?;
        handle.rsplit('-').next()?.parse().ok()
    }
}
