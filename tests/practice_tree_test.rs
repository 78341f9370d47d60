//! Practice tree behavior driven through the App.

mod common;

use std::collections::HashSet;

use common::{clear_input, click, page, page_contains, test_app, type_into};
use hooks_deck::trees::practice::{
    DECREMENT, FOCUS_INPUT, INCREMENT, NAME_INPUT, REF_INPUT, SKILLS, TOGGLE_LOGIN,
};
use hooks_deck::view::View;

#[test]
fn test_increment_n_times_then_decrement_back() {
    let mut app = test_app();

    for n in 1..=5 {
        click(&mut app, INCREMENT);
        assert_eq!(app.practice.count(), n);
    }
    assert!(page_contains(&mut app, "Count: 5"));

    for _ in 0..5 {
        click(&mut app, DECREMENT);
    }
    assert_eq!(app.practice.count(), 0);
}

#[test]
fn test_decrement_goes_negative() {
    let mut app = test_app();
    click(&mut app, DECREMENT);
    click(&mut app, DECREMENT);
    assert!(page_contains(&mut app, "Count: -2"));
}

#[test]
fn test_login_toggle_round_trip() {
    let mut app = test_app();
    assert!(page_contains(&mut app, "Please Login"));

    click(&mut app, TOGGLE_LOGIN);
    assert!(page_contains(&mut app, "User Logged In"));
    assert!(!page_contains(&mut app, "Please Login"));

    click(&mut app, TOGGLE_LOGIN);
    assert!(page_contains(&mut app, "Please Login"));
    assert!(!app.practice.is_logged_in());
}

#[test]
fn test_typed_name_is_echoed() {
    let mut app = test_app();
    assert!(page_contains(&mut app, "Typed Name: React"));

    clear_input(&mut app, NAME_INPUT, "React".len());
    assert!(page_contains(&mut app, "Typed Name: "));
    assert_eq!(app.practice.current_name(), "");

    type_into(&mut app, NAME_INPUT, "Rust");
    assert!(page_contains(&mut app, "Typed Name: Rust"));
}

#[test]
fn test_skills_render_in_order() {
    let mut app = test_app();
    let lines = page(&mut app);

    let rows: Vec<usize> = SKILLS
        .iter()
        .map(|skill| {
            lines
                .iter()
                .position(|l| l.trim_start().strip_prefix("\u{2022} ") == Some(*skill))
                .unwrap()
        })
        .collect();
    assert!(rows.windows(2).all(|w| w[1] == w[0] + 1));
    assert_eq!(app.practice.skills().labels(), SKILLS.to_vec());
}

#[test]
fn test_skill_keys_are_stable() {
    let app = test_app();
    let keys = app.practice.skills().keys();
    assert_eq!(keys, app.practice.skills().keys());
    let unique: HashSet<_> = keys.iter().collect();
    assert_eq!(unique.len(), SKILLS.len());
}

#[test]
fn test_focus_button_moves_focus_to_ref_input() {
    let mut app = test_app();
    click(&mut app, FOCUS_INPUT);
    assert_eq!(app.practice.focused(), Some(REF_INPUT));

    // Clicking again keeps focus on the same input.
    click(&mut app, FOCUS_INPUT);
    assert_eq!(app.practice.focused(), Some(REF_INPUT));
}

#[test]
fn test_static_content_present() {
    let mut app = test_app();
    for text in [
        "React Concepts",
        "Practice File",
        "Welcome to React Practice",
        "Fragment Item 1",
        "Fragment Item 2",
        "This text is styled using inline styles",
        "React Practice Completed",
    ] {
        assert!(page_contains(&mut app, text), "missing {:?}", text);
    }
}
