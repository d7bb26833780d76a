// End-to-end tests for loading a profile photo

use crate::common::fixtures::ImageFixtures;
use crate::common::harness::ComposerTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use std::path::Path;
use tweetsmith::config::Config;
use tweetsmith::view::preview::AvatarView;

fn avatar_source(harness: &ComposerTestHarness) -> Option<std::path::PathBuf> {
    harness
        .app()
        .composer()
        .draft()
        .avatar
        .as_ref()
        .map(|a| a.source().to_path_buf())
}

fn load_through_form(harness: &mut ComposerTestHarness, path: &Path) {
    harness.type_text(&path.to_string_lossy()).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();
    harness.wait_for_avatar().unwrap();
}

/// Test that a valid image typed into the photo field becomes the avatar
#[test]
fn test_load_photo_from_form() {
    let fixtures = ImageFixtures::new().unwrap();
    let photo = fixtures.png("face.png", 40, 40, [220, 40, 40, 255]);

    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    load_through_form(&mut harness, &photo);

    assert_eq!(avatar_source(&harness), Some(photo));
    let status = harness.app().status().unwrap();
    assert!(!status.is_error);
    harness.assert_screen_contains("Photo loaded: face.png");
    assert!(matches!(
        harness.app().composer().render().avatar,
        AvatarView::Photo(_)
    ));
}

/// Test that a corrupt file keeps the default avatar and reports an error
#[test]
fn test_corrupt_photo_keeps_default() {
    let fixtures = ImageFixtures::new().unwrap();
    let broken = fixtures.raw("broken.png", b"\x89PNG\r\n\x1a\nnot really");

    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    load_through_form(&mut harness, &broken);

    assert_eq!(avatar_source(&harness), None);
    assert!(harness.app().composer().render().avatar.is_default());
    assert!(harness.app().status().unwrap().is_error);
}

/// Test that a failed load after a good one keeps the good photo
#[test]
fn test_failed_photo_keeps_previous() {
    let fixtures = ImageFixtures::new().unwrap();
    let good = fixtures.png("good.png", 8, 8, [0, 200, 0, 255]);
    let missing = fixtures.path().join("missing.png");

    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    load_through_form(&mut harness, &good);

    harness
        .send_key(KeyCode::Char('u'), KeyModifiers::CONTROL)
        .unwrap();
    load_through_form(&mut harness, &missing);

    assert_eq!(avatar_source(&harness), Some(good));
    let status = harness.app().status().unwrap();
    assert!(status.is_error);
    assert!(status.text.contains("missing.png"), "{}", status.text);
}

/// Test that non-image files are refused before any load starts
#[test]
fn test_non_image_extension_is_refused() {
    let fixtures = ImageFixtures::new().unwrap();
    let notes = fixtures.raw("notes.txt", b"hello");

    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    harness.type_text(&notes.to_string_lossy()).unwrap();
    harness.send_key(KeyCode::Enter, KeyModifiers::NONE).unwrap();

    assert!(harness.app().composer().pending_avatar().is_none());
    let status = harness.app().status().unwrap();
    assert!(status.is_error);
    assert!(status.text.contains("is not an image file"));
}

/// Test that the most recent of two quick loads wins
#[test]
fn test_latest_photo_wins() {
    let fixtures = ImageFixtures::new().unwrap();
    let first = fixtures.png("first.png", 600, 600, [255, 0, 0, 255]);
    let second = fixtures.png("second.png", 4, 4, [0, 0, 255, 255]);

    let mut harness = ComposerTestHarness::new(100, 30).unwrap();
    harness.app_mut().choose_avatar(&first);
    harness.app_mut().choose_avatar(&second);
    harness.wait_for_avatar().unwrap();

    // Give the superseded load time to arrive too; it must not win
    std::thread::sleep(std::time::Duration::from_millis(200));
    harness.app_mut().process_async_messages();

    assert_eq!(avatar_source(&harness), Some(second));
}

/// Test that a raster default avatar in the assets directory is used
#[test]
fn test_default_avatar_from_assets_dir() {
    let fixtures = ImageFixtures::new().unwrap();
    fixtures.png("default-profile.png", 10, 10, [120, 120, 120, 255]);

    let mut config = Config::default();
    config.assets_dir = Some(fixtures.path().to_path_buf());
    let harness = ComposerTestHarness::with_config(config, 100, 30).unwrap();

    match harness.app().composer().render().avatar {
        AvatarView::Default { asset, image } => {
            assert_eq!(asset.path, fixtures.path().join("default-profile.svg"));
            assert!(image.is_some());
        }
        AvatarView::Photo(_) => panic!("expected the default avatar"),
    }
}
