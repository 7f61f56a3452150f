#![allow(clippy::unwrap_used)]
// Deck loading from files on disk.

use std::io::Write;
use std::time::Duration;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use carousel_config::{ConfigError, builtin_deck, load_deck, load_deck_file, render_deck, save_deck};
use carousel_core::CarouselError;

fn deck_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_custom_slides_and_interval() {
    let file = deck_file(
        r##"
interval_ms = 3000

[[slides]]
title = "One"
description = "first"
commands = ["# hello", "echo one"]

[[slides]]
title = "Two"
description = "second"
"##,
    );

    let deck = load_deck(Some(file.path())).unwrap();
    assert_eq!(deck.config.interval, Duration::from_millis(3_000));
    assert_eq!(deck.slides.len(), 2);
    assert_eq!(deck.slides[0].commands, ["# hello", "echo one"]);
    assert!(deck.slides[1].commands.is_empty());
}

#[test]
fn interval_only_file_uses_builtin_slides() {
    let file = deck_file("interval_ms = 5000\n");
    let deck = load_deck(Some(file.path())).unwrap();
    assert_eq!(deck.slides.len(), 5);
    assert_eq!(deck.config.interval, Duration::from_secs(5));
}

#[test]
fn empty_file_uses_defaults() {
    let file = deck_file("");
    let raw = load_deck_file(Some(file.path())).unwrap();
    assert_eq!(raw.interval_ms, 10_000);
    assert!(raw.slides.is_none());
}

#[test]
fn explicit_empty_slides_is_rejected() {
    let file = deck_file("slides = []\n");
    let result = load_deck(Some(file.path()));
    assert!(
        matches!(
            result,
            Err(ConfigError::Carousel(CarouselError::InvalidConfiguration { .. }))
        ),
        "expected InvalidConfiguration, got: {result:?}"
    );
}

#[test]
fn missing_explicit_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(matches!(
        load_deck(Some(&path)),
        Err(ConfigError::DeckNotFound { .. })
    ));
}

#[test]
fn malformed_file_reports_figment_error() {
    let file = deck_file("interval_ms = \"soon\"\n");
    assert!(matches!(
        load_deck(Some(file.path())),
        Err(ConfigError::Figment(_))
    ));
}

#[test]
fn saved_deck_loads_back_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deck.toml");
    let deck = builtin_deck().unwrap();

    save_deck(&deck, &path).unwrap();
    let loaded = load_deck(Some(&path)).unwrap();
    assert_eq!(loaded, deck);

    let rendered = render_deck(&deck).unwrap();
    assert!(rendered.starts_with("interval_ms = 10000"));
    assert!(rendered.contains("[[slides]]"));
}
