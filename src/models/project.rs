use serde::{Deserialize, Serialize};

/// A featured project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Shown as badges under the description, in this order.
    pub technologies: Vec<String>,
    pub link: String,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        technologies: &[&str],
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            link: link.into(),
        }
    }
}
