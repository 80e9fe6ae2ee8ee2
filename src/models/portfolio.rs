use serde::{Deserialize, Serialize};

use super::{Article, Profile, Project};

/// All data rendered on one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    /// Free text shown in the summary card.
    pub summary: String,
    /// Skill labels, rendered as badges in this order.
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub articles: Vec<Article>,
    pub labels: SectionLabels,
}

/// Headings for the page sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLabels {
    /// Value of the `lang` attribute on the document root.
    pub lang: String,
    pub summary: String,
    pub skills: String,
    pub projects: String,
    pub articles: String,
    /// Accessible name of the dark-mode toggle button.
    pub toggle_theme: String,
}
