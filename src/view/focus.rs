//! Keyboard focus and element refs.
//!
//! A view declares its focusable controls once, in tab order. The
//! [`FocusRing`] tracks which one is focused and routes raw view events to
//! either a button press or a text edit. A [`NodeRef`] is the handle that
//! lets a view move focus to a specific control on demand.

use super::ViewEvent;

/// Stable identifier of a control within one view tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(pub &'static str);

impl ControlId {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Button,
    Input,
}

/// A focusable control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub id: ControlId,
    pub kind: ControlKind,
}

impl Control {
    pub const fn button(id: ControlId) -> Self {
        Self {
            id,
            kind: ControlKind::Button,
        }
    }

    pub const fn input(id: ControlId) -> Self {
        Self {
            id,
            kind: ControlKind::Input,
        }
    }
}

/// A single edit applied to a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
}

/// What a view event resolved to after focus routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// Press a button
    Press(ControlId),
    /// Edit an input
    Edit(ControlId, Edit),
}

/// Ordered set of focusable controls with at most one focused.
#[derive(Debug, Clone)]
pub struct FocusRing {
    controls: Vec<Control>,
    current: Option<usize>,
}

impl FocusRing {
    pub fn new(controls: Vec<Control>) -> Self {
        Self {
            controls,
            current: None,
        }
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.focused_control().map(|c| c.id)
    }

    pub fn focused_control(&self) -> Option<Control> {
        self.current.and_then(|i| self.controls.get(i).copied())
    }

    pub fn is_focused(&self, id: ControlId) -> bool {
        self.focused() == Some(id)
    }

    pub fn kind_of(&self, id: ControlId) -> Option<ControlKind> {
        self.controls.iter().find(|c| c.id == id).map(|c| c.kind)
    }

    /// Focus `id`. Returns false if the ring has no such control.
    pub fn focus(&mut self, id: ControlId) -> bool {
        match self.controls.iter().position(|c| c.id == id) {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn next(&mut self) {
        if self.controls.is_empty() {
            return;
        }
        self.current = Some(match self.current {
            Some(i) => (i + 1) % self.controls.len(),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        if self.controls.is_empty() {
            return;
        }
        let len = self.controls.len();
        self.current = Some(match self.current {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        });
    }

    pub fn blur(&mut self) {
        self.current = None;
    }

    /// Apply the focus-related part of `event` and resolve the rest.
    ///
    /// Space on a focused button presses it; any other character only
    /// reaches a focused input. Clicking focuses the control first.
    pub fn route(&mut self, event: ViewEvent) -> Option<Routed> {
        match event {
            ViewEvent::FocusNext => {
                self.next();
                None
            }
            ViewEvent::FocusPrev => {
                self.prev();
                None
            }
            ViewEvent::Blur => {
                self.blur();
                None
            }
            ViewEvent::Activate => match self.focused_control() {
                Some(Control {
                    id,
                    kind: ControlKind::Button,
                }) => Some(Routed::Press(id)),
                _ => None,
            },
            ViewEvent::Click(id) => {
                if !self.focus(id) {
                    return None;
                }
                match self.kind_of(id) {
                    Some(ControlKind::Button) => Some(Routed::Press(id)),
                    _ => None,
                }
            }
            ViewEvent::Insert(c) => match self.focused_control()? {
                Control {
                    id,
                    kind: ControlKind::Input,
                } => Some(Routed::Edit(id, Edit::Insert(c))),
                Control {
                    id,
                    kind: ControlKind::Button,
                } if c == ' ' => Some(Routed::Press(id)),
                _ => None,
            },
            ViewEvent::Backspace => match self.focused_control()? {
                Control {
                    id,
                    kind: ControlKind::Input,
                } => Some(Routed::Edit(id, Edit::Backspace)),
                _ => None,
            },
        }
    }
}

/// Handle to one rendered control, used only to move focus to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeRef {
    target: Option<ControlId>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point this ref at a control.
    pub fn attach(&mut self, id: ControlId) {
        self.target = Some(id);
    }

    pub fn current(&self) -> Option<ControlId> {
        self.target
    }

    /// Move focus to the referenced control.
    ///
    /// Returns false when the ref is unattached or the control is not in
    /// `ring`; focus is left unchanged in that case.
    pub fn focus(&self, ring: &mut FocusRing) -> bool {
        match self.target {
            Some(id) => ring.focus(id),
            None => false,
        }
    }
}
