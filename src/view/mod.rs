//! Component model for the demo trees.
//!
//! A root view implements [`View`]: it owns its state, turns
//! [`ViewEvent`]s into state transitions, and describes its output into a
//! [`Document`] on every frame. The only thing a view can ask the outside
//! world to do is an [`Effect`].
//!
//! Building blocks:
//! - [`state`] - counter, toggle, text and keyed-list cells
//! - [`focus`] - focus ring, control ids and the [`NodeRef`] handle
//! - [`context`] - the immutable [`RenderContext`] broadcast down a tree
//! - [`memo`] - [`Memo`] for leaves that only re-render on input change
//! - [`lifecycle`] - mount tracking and the [`WithLogger`] wrapper

pub mod context;
pub mod focus;
pub mod lifecycle;
pub mod memo;
pub mod state;

pub use context::{RenderContext, Theme};
pub use focus::{Control, ControlId, ControlKind, Edit, FocusRing, NodeRef, Routed};
pub use lifecycle::{with_logger, Lifecycle, WithLogger};
pub use memo::Memo;
pub use state::{Counter, ItemKey, KeyedList, TextValue, Toggle};

use crate::ui::Document;

/// Input delivered to the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Move focus forward
    FocusNext,
    /// Move focus backward
    FocusPrev,
    /// Press the focused button
    Activate,
    /// Type a character
    Insert(char),
    /// Delete the last character of the focused input
    Backspace,
    /// Click on a control
    Click(ControlId),
    /// Drop focus
    Blur,
}

/// Side effect requested by a view and carried out by the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one GET and log the response body.
    Fetch { url: String },
}

/// A root view: state owner and renderer for one tree.
pub trait View {
    /// Display name, also used by [`WithLogger`].
    fn name(&self) -> &'static str;

    /// Called when the view becomes visible.
    fn mount(&mut self) {}

    /// Called when the view stops being visible.
    fn unmount(&mut self) {}

    /// Apply a user event. Returns an effect for the app to run, if any.
    fn handle_event(&mut self, event: ViewEvent) -> Option<Effect>;

    /// Describe the current output into `doc`.
    fn build(&mut self, ctx: &RenderContext, doc: &mut Document);

    /// Currently focused control.
    fn focused(&self) -> Option<ControlId> {
        None
    }
}
