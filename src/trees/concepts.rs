//! Concepts tree: a theme provider around a page that exercises named
//! state, a conditional block, a list, a reusable counter, a ref, a
//! memoized child and one network fetch.

use ratatui::text::Line;

use super::leaves;
use crate::config::DEFAULT_FETCH_URL;
use crate::ui::Document;
use crate::view::{
    Control, ControlId, Counter, Edit, Effect, FocusRing, KeyedList, Lifecycle, Memo, NodeRef,
    RenderContext, Routed, TextValue, Theme, Toggle, View, ViewEvent,
};

pub const CHANGE_NAME: ControlId = ControlId("concepts.change_name");
pub const NAME_INPUT: ControlId = ControlId("concepts.name");
pub const TOGGLE: ControlId = ControlId("concepts.toggle");
pub const INCREMENT: ControlId = ControlId("concepts.increment");
pub const DECREMENT: ControlId = ControlId("concepts.decrement");
pub const FOCUS_INPUT: ControlId = ControlId("concepts.focus_input");
pub const FETCH: ControlId = ControlId("concepts.fetch");

pub const DEFAULT_NAME: &str = "React";
pub const RENAMED: &str = "ReactJS";
pub const ITEMS: [&str; 3] = ["JS", "React", "Redux"];

/// Value published by the provider at the top of this tree.
pub const THEME: Theme = Theme::Dark;

/// Root view of the concepts tree.
#[derive(Debug)]
pub struct ConceptsView {
    name: TextValue,
    show: Toggle,
    items: KeyedList<String>,
    counter: Counter,
    input_ref: NodeRef,
    focus: FocusRing,
    child: Memo<i64, Line<'static>>,
    fetch_url: String,
    lifecycle: Lifecycle,
}

impl ConceptsView {
    pub fn new(fetch_url: impl Into<String>) -> Self {
        let mut input_ref = NodeRef::new();
        input_ref.attach(NAME_INPUT);

        Self {
            name: TextValue::new(DEFAULT_NAME),
            show: Toggle::new(true),
            items: KeyedList::of(&ITEMS),
            counter: Counter::new(0),
            input_ref,
            focus: FocusRing::new(vec![
                Control::button(CHANGE_NAME),
                Control::input(NAME_INPUT),
                Control::button(TOGGLE),
                Control::button(INCREMENT),
                Control::button(DECREMENT),
                Control::button(FOCUS_INPUT),
                Control::button(FETCH),
            ]),
            child: Memo::new(),
            fetch_url: fetch_url.into(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn current_name(&self) -> &str {
        self.name.value()
    }

    pub fn is_shown(&self) -> bool {
        self.show.is_on()
    }

    pub fn items(&self) -> &KeyedList<String> {
        &self.items
    }

    pub fn count(&self) -> i64 {
        self.counter.value()
    }

    pub fn fetch_url(&self) -> &str {
        &self.fetch_url
    }

    /// Times the memoized child has actually re-rendered.
    pub fn child_render_count(&self) -> u64 {
        self.child.render_count()
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn press(&mut self, id: ControlId) -> Option<Effect> {
        match id {
            CHANGE_NAME => self.name.set(RENAMED),
            TOGGLE => self.show.toggle(),
            INCREMENT => self.counter.increment(),
            DECREMENT => self.counter.decrement(),
            FOCUS_INPUT => {
                self.input_ref.focus(&mut self.focus);
            }
            FETCH => {
                return Some(Effect::Fetch {
                    url: self.fetch_url.clone(),
                })
            }
            _ => {}
        }
        None
    }

    fn edit(&mut self, id: ControlId, edit: Edit) {
        if id == NAME_INPUT {
            self.name.apply(edit);
        }
    }
}

impl Default for ConceptsView {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_URL)
    }
}

impl View for ConceptsView {
    fn name(&self) -> &'static str {
        "App"
    }

    fn mount(&mut self) {
        if self.lifecycle.mount() {
            tracing::info!("Component Mounted");
        }
    }

    fn unmount(&mut self) {
        if self.lifecycle.unmount() {
            tracing::info!("Component Unmounted");
        }
    }

    fn handle_event(&mut self, event: ViewEvent) -> Option<Effect> {
        match self.focus.route(event)? {
            Routed::Press(id) => self.press(id),
            Routed::Edit(id, edit) => {
                self.edit(id, edit);
                None
            }
        }
    }

    fn build(&mut self, ctx: &RenderContext, doc: &mut Document) {
        let provided = ctx.provide(THEME);
        let page = provided.descend();

        doc.title(format!("Hello {}", self.name.value()));
        doc.buttons(&[(CHANGE_NAME, "Change Name")]);
        doc.input(NAME_INPUT, self.name.value(), None);

        doc.heading("Conditional");
        if self.show.is_on() {
            doc.text("This is conditionally rendered");
        }
        doc.buttons(&[(TOGGLE, "Toggle")]);

        doc.heading("List");
        doc.list(self.items.iter().map(|(_, item)| item.as_str()));

        doc.heading("Custom Counter");
        doc.text(format!("Counter: {}", self.counter.value()));
        doc.buttons(&[(INCREMENT, "+"), (DECREMENT, "-")]);

        doc.heading("Ref");
        doc.buttons(&[(FOCUS_INPUT, "Focus Input")]);

        doc.heading("Memo Child");
        let count = self.counter.value();
        let child = self.child.render(&count, |value| {
            tracing::info!("Child rendered");
            leaves::child_value(*value)
        });
        doc.line(child.clone());

        doc.heading("Fetch");
        doc.buttons(&[(FETCH, "Fetch API")]);

        doc.blank();
        doc.line(leaves::theme_display(&page.descend()));
    }

    fn focused(&self) -> Option<ControlId> {
        self.focus.focused()
    }
}
