//! HTML rendering for the portfolio page.
//!
//! Each visual block is a leptos component rendered on the server. Text and
//! attribute values go through leptos' escaping. [`render_page`] builds the
//! whole document.

mod components;
mod page;

use std::io::Write;
use std::path::Path;

use leptos::prelude::*;

pub use components::*;
pub use page::*;

use crate::error::RenderError;

/// Render a view to an HTML string inside a fresh reactive owner.
pub fn render_view<V>(view: impl FnOnce() -> V) -> String
where
    V: IntoView + 'static,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

/// Reference to a symbol in the inlined icon sprite.
#[component]
pub fn Icon(name: &'static str, #[prop(optional)] class: &'static str) -> impl IntoView {
    let symbol = format!(r##"<svg viewBox="0 0 24 24"><use href="#icon-{name}"></use></svg>"##);
    view! { <span aria-hidden="true" class={format!("icon {class}")} inner_html=symbol></span> }
}

/// Write a rendered document to `path`, or to stdout when no path is given.
pub fn write_document(document: &str, path: Option<&Path>) -> Result<(), RenderError> {
    match path {
        Some(path) => std::fs::write(path, document).map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(RenderError::Stdout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_references_sprite_symbol() {
        let html = render_view(|| view! { <Icon name="mail" class="icon-sm"/> });
        assert!(html.contains(r##"<use href="#icon-mail"></use>"##));
        assert!(html.contains(r#"class="icon icon-sm""#));
        assert!(html.contains(r#"aria-hidden="true""#));
    }

    #[test]
    fn render_view_escapes_text() {
        let text = r#"<a href="x">Tom & Jerry</a>"#.to_string();
        let html = render_view(move || view! { <p>{text}</p> });
        assert!(html.contains("&lt;a href="));
        assert!(html.contains("Tom &amp; Jerry"));
        assert!(!html.contains("<a href"));
    }
}
