use std::sync::Arc;

use crate::models::{Portfolio, Theme};

/// Shared state handed to every handler.
///
/// The theme here is only the starting point. Each visitor's choice travels
/// in their own `theme` cookie.
#[derive(Clone, Debug)]
pub struct AppState {
    pub portfolio: Arc<Portfolio>,
    pub default_theme: Theme,
}

impl AppState {
    pub fn new(portfolio: Portfolio, default_theme: Theme) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
            default_theme,
        }
    }
}
