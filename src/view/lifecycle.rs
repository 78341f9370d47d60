//! Mount/unmount tracking and the logging wrapper.

use super::{ControlId, Effect, RenderContext, View, ViewEvent};
use crate::ui::Document;

/// Tracks whether a view is currently mounted.
///
/// `mount` and `unmount` return true only on an actual transition, so
/// side effects gated on them fire exactly once per transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lifecycle {
    mounted: bool,
    mounts: u32,
    unmounts: u32,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        self.mounts += 1;
        true
    }

    pub fn unmount(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        self.mounted = false;
        self.unmounts += 1;
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn mount_count(&self) -> u32 {
        self.mounts
    }

    pub fn unmount_count(&self) -> u32 {
        self.unmounts
    }
}

/// Wraps a view and logs when it mounts and unmounts.
///
/// Rendering and events pass straight through, so the wrapped view's
/// output is unchanged.
#[derive(Debug)]
pub struct WithLogger<V> {
    inner: V,
    lifecycle: Lifecycle,
}

/// Wrap `view` with mount logging.
pub fn with_logger<V: View>(view: V) -> WithLogger<V> {
    WithLogger {
        inner: view,
        lifecycle: Lifecycle::new(),
    }
}

impl<V> WithLogger<V> {
    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut V {
        &mut self.inner
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}

impl<V: View> View for WithLogger<V> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn mount(&mut self) {
        // Children mount before the wrapper observes the mount.
        self.inner.mount();
        if self.lifecycle.mount() {
            tracing::info!("Component mounted: {}", self.inner.name());
        }
    }

    fn unmount(&mut self) {
        if self.lifecycle.unmount() {
            tracing::info!("Component unmounted: {}", self.inner.name());
        }
        self.inner.unmount();
    }

    fn handle_event(&mut self, event: ViewEvent) -> Option<Effect> {
        self.inner.handle_event(event)
    }

    fn build(&mut self, ctx: &RenderContext, doc: &mut Document) {
        self.inner.build(ctx, doc);
    }

    fn focused(&self) -> Option<ControlId> {
        self.inner.focused()
    }
}
