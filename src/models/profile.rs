use serde::{Deserialize, Serialize};

/// Identity block rendered in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Remotely hosted photo. A dead URL is left to the browser.
    pub photo_url: String,
    pub photo_alt: String,
    pub email: String,
    pub links: Vec<SocialLink>,
}

/// An outbound profile link rendered as an icon button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub href: String,
    pub icon: SocialIcon,
}

impl SocialLink {
    pub fn new(href: impl Into<String>, icon: SocialIcon) -> Self {
        Self {
            href: href.into(),
            icon,
        }
    }
}

/// Icons available in the bundled sprite for social links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialIcon {
    Github,
    Twitter,
    Linkedin,
}

impl SocialIcon {
    /// Symbol id inside `icons.svg`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
        }
    }

    /// Accessible name for the link, since the anchor has no visible text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Twitter => "Twitter",
            Self::Linkedin => "LinkedIn",
        }
    }
}
