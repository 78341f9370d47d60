//! Practice tree: counter, bound input, login toggle, skill list and a
//! ref-focused input on one page.

use ratatui::style::{Modifier, Style};

use super::leaves;
use crate::ui::theme::COLOR_NOTE;
use crate::ui::Document;
use crate::view::{
    Control, ControlId, Counter, Edit, Effect, FocusRing, KeyedList, Lifecycle, NodeRef,
    RenderContext, Routed, TextValue, Toggle, View, ViewEvent,
};

pub const INCREMENT: ControlId = ControlId("practice.increment");
pub const DECREMENT: ControlId = ControlId("practice.decrement");
pub const NAME_INPUT: ControlId = ControlId("practice.name");
pub const TOGGLE_LOGIN: ControlId = ControlId("practice.toggle_login");
pub const REF_INPUT: ControlId = ControlId("practice.ref_input");
pub const FOCUS_INPUT: ControlId = ControlId("practice.focus_input");

pub const DEFAULT_NAME: &str = "React";
pub const SKILLS: [&str; 4] = ["HTML", "CSS", "JavaScript", "React"];
pub const REF_PLACEHOLDER: &str = "Click button to focus";

/// Root view of the practice tree.
#[derive(Debug)]
pub struct PracticeView {
    count: Counter,
    name: TextValue,
    logged_in: Toggle,
    skills: KeyedList<String>,
    ref_input: TextValue,
    input_ref: NodeRef,
    focus: FocusRing,
    lifecycle: Lifecycle,
}

impl PracticeView {
    pub fn new() -> Self {
        let mut input_ref = NodeRef::new();
        input_ref.attach(REF_INPUT);

        Self {
            count: Counter::new(0),
            name: TextValue::new(DEFAULT_NAME),
            logged_in: Toggle::new(false),
            skills: KeyedList::of(&SKILLS),
            ref_input: TextValue::default(),
            input_ref,
            focus: FocusRing::new(vec![
                Control::button(INCREMENT),
                Control::button(DECREMENT),
                Control::input(NAME_INPUT),
                Control::button(TOGGLE_LOGIN),
                Control::input(REF_INPUT),
                Control::button(FOCUS_INPUT),
            ]),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn count(&self) -> i64 {
        self.count.value()
    }

    pub fn current_name(&self) -> &str {
        self.name.value()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in.is_on()
    }

    pub fn skills(&self) -> &KeyedList<String> {
        &self.skills
    }

    pub fn ref_input(&self) -> &str {
        self.ref_input.value()
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn press(&mut self, id: ControlId) {
        match id {
            INCREMENT => self.count.increment(),
            DECREMENT => self.count.decrement(),
            TOGGLE_LOGIN => self.logged_in.toggle(),
            FOCUS_INPUT => {
                self.input_ref.focus(&mut self.focus);
            }
            _ => {}
        }
    }

    fn edit(&mut self, id: ControlId, edit: Edit) {
        match id {
            NAME_INPUT => self.name.apply(edit),
            REF_INPUT => self.ref_input.apply(edit),
            _ => {}
        }
    }
}

impl Default for PracticeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for PracticeView {
    fn name(&self) -> &'static str {
        "PracticeApp"
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
            Routed::Edit(id, edit) => self.edit(id, edit),
        }
        None
    }

    fn build(&mut self, _ctx: &RenderContext, doc: &mut Document) {
        doc.line(leaves::banner("React Concepts"));
        doc.title("Practice File");
        doc.line(leaves::greeting("Welcome to React Practice"));

        doc.heading("Counter Example");
        doc.text(format!("Count: {}", self.count.value()));
        doc.buttons(&[(INCREMENT, "Increment"), (DECREMENT, "Decrement")]);

        doc.heading("One Way Data Binding");
        doc.input(NAME_INPUT, self.name.value(), None);
        doc.text(format!("Typed Name: {}", self.name.value()));

        doc.heading("Conditional Rendering");
        if self.logged_in.is_on() {
            doc.text("User Logged In");
        } else {
            doc.text("Please Login");
        }
        doc.buttons(&[(TOGGLE_LOGIN, "Toggle Login")]);

        doc.heading("Skill List");
        doc.list(self.skills.iter().map(|(_, skill)| skill.as_str()));

        doc.heading("useRef Example");
        doc.input(REF_INPUT, self.ref_input.value(), Some(REF_PLACEHOLDER));
        doc.buttons(&[(FOCUS_INPUT, "Focus Input")]);

        doc.blank();
        doc.styled(
            "This text is styled using inline styles",
            Style::default().fg(COLOR_NOTE).add_modifier(Modifier::BOLD),
        );
        doc.text("Fragment Item 1");
        doc.text("Fragment Item 2");

        doc.blank();
        doc.line(leaves::footer());
    }

    fn focused(&self) -> Option<ControlId> {
        self.focus.focused()
    }
}
