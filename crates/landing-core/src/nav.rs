use crate::error::{SiteError, SiteResult};

/// Which page section is shown. Exactly one section is active once any exist.
#[derive(Clone, Debug, Default)]
pub struct NavState {
    sections: Vec<String>,
    active: usize,
}

impl NavState {
    /// Build from the section ids in document order. `initial` picks the
    /// section already marked active in markup; falls back to the first.
    pub fn new(sections: Vec<String>, initial: Option<&str>) -> Self {
        let active = initial
            .and_then(|id| sections.iter().position(|s| s == id))
            .unwrap_or(0);
        Self { sections, active }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active_id(&self) -> Option<&str> {
        self.sections.get(self.active).map(String::as_str)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    /// Make `id` the single active section and return its index.
    /// Unknown ids are rejected without touching the current selection.
    pub fn activate(&mut self, id: &str) -> SiteResult<usize> {
        let idx = self
            .sections
            .iter()
            .position(|s| s == id)
            .ok_or_else(|| SiteError::UnknownSection(id.to_string()))?;
        self.active = idx;
        Ok(idx)
    }
}
