//! Pad descriptors.
//!
//! A pad is a tool window (project browser, error list, output) described
//! declaratively; the shell keeps the ordered collection and the layout
//! collaborator decides where each pad docks.

/// Index of a pad in the shell's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PadId(pub(crate) usize);

/// Declarative description of one pad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadDescriptor {
    class: String,
    title: String,
    category: Option<String>,
}

impl PadDescriptor {
    /// Create a descriptor with the pad's unique class name and title.
    #[must_use]
    pub fn new(class: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            title: title.into(),
            category: None,
        }
    }

    /// Set the menu category the pad is listed under.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// The pad's unique class name.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The pad's display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The menu category, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_builders() {
        let pad = PadDescriptor::new("ProjectBrowserPad", "Projects").with_category("Main");
        assert_eq!(pad.class(), "ProjectBrowserPad");
        assert_eq!(pad.title(), "Projects");
        assert_eq!(pad.category(), Some("Main"));
    }
}
