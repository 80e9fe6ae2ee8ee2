//! Personal portfolio page: profile, skills, projects and articles rendered
//! from static data, with a dark-mode toggle.
//!
//! The page can be served over HTTP ([`api`]) or written once as a standalone
//! document ([`render::render_page`] with [`render::PageOptions::standalone`]).
#![recursion_limit = "256"]

pub mod api;
pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod render;
