// End-to-end tests for the verification badge picker

use crate::common::harness::ComposerTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use tweetsmith::model::Badge;
use tweetsmith::view::form::Focus;

/// Tab from the photo input to the badge picker
fn focus_badge_picker(harness: &mut ComposerTestHarness) {
    harness.tab(4).unwrap();
    assert_eq!(harness.app().form().focus, Focus::Badge);
}

/// Find the preview row that shows the display name
///
/// The form's name input holds the same text, so only the right half of the
/// screen (where the preview sits at this width) is searched.
fn name_row(harness: &ComposerTestHarness, name: &str) -> String {
    harness
        .screen_to_string()
        .lines()
        .map(|row| row.chars().skip(50).collect::<String>())
        .find(|row| row.contains(name))
        .unwrap_or_else(|| panic!("no preview row contains {name}"))
}

/// Test that a digit selects a badge and its glyph shows beside the name
#[test]
fn test_digit_selects_badge() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    harness.tab(1).unwrap();
    harness.type_text("Ada").unwrap();
    harness.tab(1).unwrap();
    harness.type_text("ada").unwrap();

    harness.tab(2).unwrap();
    assert_eq!(harness.app().form().focus, Focus::Badge);
    harness.type_text("1").unwrap();

    assert_eq!(harness.app().composer().draft().badge, Badge::BlueTick);
    let row = name_row(&harness, "Ada");
    assert!(row.contains("Ada ✔"), "row was: {row}");
    // Digits in the picker do not leak into any text field
    assert_eq!(harness.app().composer().draft().display_name, "Ada");
}

/// Test that arrow keys move the highlight and Enter selects
#[test]
fn test_arrow_and_enter_select() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    focus_badge_picker(&mut harness);

    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    // Moving the highlight alone does not change the draft
    assert_eq!(harness.app().composer().draft().badge, Badge::None);

    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().composer().draft().badge, Badge::PinkTick);
}

/// Test that selecting the active badge again keeps it selected
#[test]
fn test_reselect_is_not_a_toggle() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    focus_badge_picker(&mut harness);

    harness.type_text("3").unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.send_key(KeyCode::Char(' '), KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().composer().draft().badge, Badge::GoldenTick);
}

/// Test that choosing "No Badge" removes the glyph from the preview
#[test]
fn test_no_badge_removes_glyph() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    harness.tab(1).unwrap();
    harness.type_text("Ada").unwrap();
    harness.tab(3).unwrap();

    harness.type_text("5").unwrap();
    assert!(name_row(&harness, "Ada").contains("Ada ✔"));

    harness.type_text("0").unwrap();
    assert_eq!(harness.app().composer().draft().badge, Badge::None);
    let row = name_row(&harness, "Ada");
    assert!(!row.contains("Ada ✔"), "row was: {row}");
}

/// Test that returning to the picker highlights the selected badge
#[test]
fn test_highlight_follows_selection_on_refocus() {
    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    focus_badge_picker(&mut harness);
    harness.type_text("4").unwrap();

    harness.tab(5).unwrap();
    assert_eq!(harness.app().form().focus, Focus::Badge);
    assert_eq!(harness.app().form().highlighted_badge(), Badge::CurlyTick);
}
