//! Render context passed down the view tree.
//!
//! The context is an immutable value. A provider creates a new scope with
//! [`RenderContext::provide`]; everything built inside that scope can read
//! the value with [`RenderContext::theme`] without it being threaded
//! through intermediate views. There is no write path below the provider.

use std::fmt;

/// Theme label broadcast by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable per-scope render context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    theme: Option<Theme>,
}

impl RenderContext {
    /// Context at the top of a tree, with no provider.
    pub fn root() -> Self {
        Self::default()
    }

    /// Open a provider scope fixing `theme` for every descendant.
    pub fn provide(&self, theme: Theme) -> Self {
        Self { theme: Some(theme) }
    }

    /// Scope for a child view. Inherits the provided value unchanged.
    pub fn descend(&self) -> Self {
        *self
    }

    /// The value of the nearest provider, if any.
    pub fn theme(&self) -> Option<Theme> {
        self.theme
    }
}
