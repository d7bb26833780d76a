// End-to-end tests for typing into the form and seeing it in the preview

use crate::common::harness::ComposerTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use tweetsmith::config::Config;
use tweetsmith::view::form::Focus;

/// Test that the initial screen shows the form and a placeholder preview
#[test]
fn test_initial_screen_shows_placeholders() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("Tweet Generator");
    harness.assert_screen_contains("Profile Photo");
    harness.assert_screen_contains("Verification Badge");
    harness.assert_screen_contains("Preview");
    harness.assert_screen_contains("@username");
    harness.assert_screen_contains("Your tweet text will appear here");
}

/// Test that typing in each field updates the draft and the preview
#[test]
fn test_typed_fields_appear_in_preview() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();

    harness.tab(1).unwrap();
    harness.type_text("Ada Lovelace").unwrap();
    harness.tab(1).unwrap();
    harness.type_text("ada").unwrap();
    harness.tab(1).unwrap();
    harness.type_text("Hello from the engine").unwrap();

    let draft = harness.app().composer().draft();
    assert_eq!(draft.display_name, "Ada Lovelace");
    assert_eq!(draft.handle, "ada");
    assert_eq!(draft.body, "Hello from the engine");

    harness.assert_screen_contains("@ada");
    harness.assert_screen_not_contains("@username");
    harness.assert_screen_not_contains("Your tweet text will appear here");
    // Once in the form input, once in the preview
    assert_eq!(harness.screen_to_string().matches("Hello from the engine").count(), 2);
}

/// Test that clearing a field brings its placeholder back
#[test]
fn test_clearing_field_restores_placeholder() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();

    harness.tab(2).unwrap();
    harness.type_text("bob").unwrap();
    harness.assert_screen_contains("@bob");

    harness
        .send_key(KeyCode::Char('u'), KeyModifiers::CONTROL)
        .unwrap();
    assert_eq!(harness.app().composer().draft().handle, "");
    harness.assert_screen_contains("@username");
}

/// Test that backspace edits flow through to the draft
#[test]
fn test_backspace_updates_draft() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();

    harness.tab(1).unwrap();
    harness.type_text("Adaa").unwrap();
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.app().composer().draft().display_name, "Ada");

    harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Delete, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().composer().draft().display_name, "Ad");
}

/// Test that Enter in the tweet text inserts a newline instead of moving focus
#[test]
fn test_multiline_body() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();

    harness.tab(3).unwrap();
    harness.type_text("first line").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.type_text("second line").unwrap();

    assert_eq!(harness.app().form().focus, Focus::Text);
    assert_eq!(
        harness.app().composer().draft().body,
        "first line\nsecond line"
    );
    harness.assert_screen_contains("second line");
}

/// Test that Enter on a single-line field moves to the next control
#[test]
fn test_enter_on_name_moves_focus() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();

    harness.tab(1).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().form().focus, Focus::Username);

    harness
        .send_key(KeyCode::BackTab, KeyModifiers::SHIFT)
        .unwrap();
    assert_eq!(harness.app().form().focus, Focus::Name);
}

/// Test that a narrow terminal stacks the preview under the form
#[test]
fn test_narrow_terminal_layout() {
    let mut harness = ComposerTestHarness::new(60, 40).unwrap();
    harness.tab(1).unwrap();
    harness.type_text("Grace").unwrap();

    harness.assert_screen_contains("Preview");
    let preview_row = (0..40)
        .find(|y| harness.screen_row(*y).contains("Preview"))
        .unwrap();
    let form_row = (0..40)
        .find(|y| harness.screen_row(*y).contains("Profile Photo"))
        .unwrap();
    assert!(preview_row > form_row);
}

/// Test that configured placeholders are used in the preview
#[test]
fn test_custom_placeholders_from_config() {
    let mut config = Config::default();
    config.placeholders.body = "Say something".to_string();
    let mut harness = ComposerTestHarness::with_config(config, 100, 30).unwrap();
    harness.render().unwrap();

    harness.assert_screen_contains("Say something");
    harness.assert_screen_not_contains("Your tweet text will appear here");
}

/// Test that the end of a name wider than its input is visible in the form
/// and in the preview
#[test]
fn test_long_name_tail_is_visible() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    let name = format!("{}TAILEND", "x".repeat(60));

    harness.tab(1).unwrap();
    harness.type_text(&name).unwrap();
    assert_eq!(harness.app().composer().draft().display_name, name);

    let screen = harness.screen_to_string();
    let form_shows_tail = screen
        .lines()
        .any(|row| row.chars().take(50).collect::<String>().contains("TAILEND"));
    let preview_shows_tail = screen
        .lines()
        .any(|row| row.chars().skip(50).collect::<String>().contains("TAILEND"));
    assert!(form_shows_tail, "Screen:\n{screen}");
    assert!(preview_shows_tail, "Screen:\n{screen}");
}

/// Test that a name longer than a terminal coordinate can hold still renders
#[test]
fn test_name_longer_than_u16_renders() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    let name = format!("{}END", "x".repeat(usize::from(u16::MAX) + 10));

    harness.tab(1).unwrap();
    harness.type_text(&name).unwrap();

    assert_eq!(harness.app().composer().draft().display_name.len(), name.len());
    harness.assert_screen_contains("xxEND");
}

/// Test that Esc quits
#[test]
fn test_escape_quits() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    assert!(!harness.app().should_quit());
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert!(harness.app().should_quit());
}
