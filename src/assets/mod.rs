//! Static assets bundled into the binary.

/// Stylesheet for the page. Dark variants are scoped under `html.dark`.
pub const STYLES: &str = include_str!("styles.css");

/// Route the server exposes [`STYLES`] on.
pub const STYLES_PATH: &str = "/assets/styles.css";

/// Hidden SVG sprite, inlined at the top of `<body>`.
pub const ICONS: &str = include_str!("icons.svg");
