//! Memoized rendering.

/// Caches the output of a render function keyed by its input.
///
/// The render function runs only when the input differs from the one it
/// last ran with, so unrelated state changes in the parent never reach it.
#[derive(Debug, Clone)]
pub struct Memo<P, T> {
    cached: Option<(P, T)>,
    renders: u64,
}

impl<P: PartialEq + Clone, T> Memo<P, T> {
    pub fn new() -> Self {
        Self {
            cached: None,
            renders: 0,
        }
    }

    /// Return the output for `props`, rendering only if they changed.
    pub fn render<F>(&mut self, props: &P, render: F) -> &T
    where
        F: FnOnce(&P) -> T,
    {
        if matches!(&self.cached, Some((last, _)) if last != props) {
            self.cached = None;
        }
        let renders = &mut self.renders;
        let (_, output) = self.cached.get_or_insert_with(|| {
            *renders += 1;
            (props.clone(), render(props))
        });
        output
    }

    /// How many times the render function has actually run.
    pub fn render_count(&self) -> u64 {
        self.renders
    }
}

impl<P: PartialEq + Clone, T> Default for Memo<P, T> {
    fn default() -> Self {
        Self::new()
    }
}
