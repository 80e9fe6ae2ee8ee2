//! Page data for the portfolio.
//!
//! Everything here is a plain value record. Records are authored once in
//! [`crate::content`] and never change while the program runs; the only
//! runtime state is the [`Theme`] held by the server.
//!
//! - [`Profile`]: identity shown in the sidebar, with its [`SocialLink`]s.
//! - [`Project`] / [`Article`]: list entries rendered as cards.
//! - [`Portfolio`]: everything one page needs, bundled together.

mod article;
mod portfolio;
mod profile;
mod project;
mod theme;

pub use article::*;
pub use portfolio::*;
pub use profile::*;
pub use project::*;
pub use theme::*;
