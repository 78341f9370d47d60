//! Concepts tree behavior driven through the App.

mod common;

use common::{click, concepts_app, page, page_contains, render, type_into};
use hooks_deck::trees::concepts::{
    CHANGE_NAME, DECREMENT, FOCUS_INPUT, INCREMENT, ITEMS, NAME_INPUT, TOGGLE,
};
use hooks_deck::trees::leaves;
use hooks_deck::view::{RenderContext, Theme, View};

#[test]
fn test_theme_consumer_reads_dark() {
    let mut app = concepts_app();
    assert!(page_contains(&mut app, "Current Theme: dark"));
}

#[test]
fn test_theme_survives_any_depth() {
    let mut ctx = RenderContext::root().provide(Theme::Dark);
    for _ in 0..16 {
        ctx = ctx.descend();
    }
    let line = leaves::theme_display(&ctx);
    let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(text, "Current Theme: dark");
}

#[test]
fn test_greeting_follows_name() {
    let mut app = concepts_app();
    assert!(page_contains(&mut app, "Hello React"));

    type_into(&mut app, NAME_INPUT, " Native");
    assert!(page_contains(&mut app, "Hello React Native"));

    click(&mut app, CHANGE_NAME);
    assert!(page_contains(&mut app, "Hello ReactJS"));
    assert_eq!(app.concepts.inner().current_name(), "ReactJS");
}

#[test]
fn test_conditional_block_tracks_flag() {
    let mut app = concepts_app();
    for step in 0..4 {
        let shown = step % 2 == 0;
        assert_eq!(app.concepts.inner().is_shown(), shown);
        assert_eq!(
            page_contains(&mut app, "This is conditionally rendered"),
            shown
        );
        click(&mut app, TOGGLE);
    }
}

#[test]
fn test_list_renders_one_row_per_item_in_order() {
    let mut app = concepts_app();
    let lines = page(&mut app);

    let bullets: Vec<&str> = lines
        .iter()
        .filter_map(|l| l.trim_start().strip_prefix("\u{2022} "))
        .collect();
    assert_eq!(bullets, ITEMS.to_vec());

    let rows: Vec<usize> = ITEMS
        .iter()
        .map(|item| {
            lines
                .iter()
                .position(|l| l.trim_start().strip_prefix("\u{2022} ") == Some(*item))
                .unwrap()
        })
        .collect();
    assert!(rows.windows(2).all(|w| w[1] == w[0] + 1));
    assert_eq!(app.concepts.inner().items().labels(), ITEMS.to_vec());
}

#[test]
fn test_counter_hook() {
    let mut app = concepts_app();
    click(&mut app, INCREMENT);
    click(&mut app, INCREMENT);
    click(&mut app, DECREMENT);
    assert!(page_contains(&mut app, "Counter: 1"));
    assert!(page_contains(&mut app, "Child Value: 1"));
}

#[test]
fn test_memo_child_only_rerenders_on_value_change() {
    let mut app = concepts_app();
    render(&mut app);
    let baseline = app.concepts.inner().child_render_count();
    assert_eq!(baseline, 1);

    type_into(&mut app, NAME_INPUT, "abc");
    click(&mut app, TOGGLE);
    click(&mut app, CHANGE_NAME);
    render(&mut app);
    assert_eq!(app.concepts.inner().child_render_count(), baseline);

    click(&mut app, INCREMENT);
    render(&mut app);
    assert_eq!(app.concepts.inner().child_render_count(), baseline + 1);

    // Back to a previously seen value still counts as a change.
    click(&mut app, DECREMENT);
    render(&mut app);
    assert_eq!(app.concepts.inner().child_render_count(), baseline + 2);
}

#[test]
fn test_focus_button_targets_name_input() {
    let mut app = concepts_app();
    click(&mut app, FOCUS_INPUT);
    assert_eq!(app.concepts.focused(), Some(NAME_INPUT));
}
