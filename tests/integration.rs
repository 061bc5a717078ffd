// SPDX-License-Identifier: MPL-2.0
use iced::Rectangle;
use std::time::{Duration, Instant};
use storefront_fx::config::{self, Config, NavigationConfig};
use storefront_fx::error::Error;
use storefront_fx::page::contact::{ContactForm, Field};
use storefront_fx::page::navigation::scroll_to_section;
use storefront_fx::page::{BlockId, Catalog, Layout, SectionId};
use storefront_fx::ui::design_tokens::palette;
use storefront_fx::ui::notifications::{present_notification, Phase, Presenter, Severity};
use storefront_fx::ui::reveal::{init_visibility_animator, Animator};
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn viewport_at(scroll_y: f32) -> Rectangle {
    Rectangle {
        x: 0.0,
        y: scroll_y,
        width: 1100.0,
        height: 800.0,
    }
}

#[test]
fn config_round_trips_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("settings.toml");

    let config = Config {
        navigation: NavigationConfig {
            scroll_offset: Some(90.0),
            smooth_scroll_ms: Some(250),
        },
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
    assert_eq!(loaded.navigation.scroll_offset(), 90.0);
    assert_eq!(loaded.navigation.smooth_scroll_duration(), ms(250));
}

#[test]
fn malformed_settings_fall_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "navigation = [")
        .expect("Failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(config::LOAD_WARNING));
}

#[test]
fn rejected_contact_form_shows_red_toast_for_its_lifetime() {
    let start = Instant::now();
    let mut presenter = Presenter::new();
    let mut form = ContactForm::new();
    form.set(Field::Name, "Sana".to_string());

    let err = form.submit().expect_err("email and message are missing");
    let id = present_notification(&mut presenter, err.to_string(), "error", start);

    let toast = presenter.get(id).expect("attached");
    assert_eq!(toast.message(), "Please fill in all required fields.");
    assert_eq!(toast.severity().color(), palette::ERROR_500);

    presenter.tick(start + ms(1500));
    assert_eq!(presenter.get(id).map(|n| n.phase()), Some(Phase::Shown));

    presenter.tick(start + ms(3250));
    assert!(presenter.contains(id));

    presenter.tick(start + ms(3300));
    assert!(!presenter.contains(id));
    assert!(!presenter.has_notifications());
}

#[test]
fn concurrent_notifications_follow_independent_lifecycles() {
    let start = Instant::now();
    let mut presenter = Presenter::new();

    let a = present_notification(&mut presenter, "A", "error", start);
    let b = present_notification(&mut presenter, "B", "success", start + ms(1000));
    assert_eq!(presenter.in_flight(), 2);
    assert_eq!(presenter.get(b).map(|n| n.severity()), Some(Severity::Success));

    presenter.tick(start + ms(3300));
    assert!(!presenter.contains(a));
    assert!(presenter.contains(b));

    presenter.tick(start + ms(4300));
    assert!(!presenter.contains(b));
}

#[test]
fn block_below_viewport_reveals_inside_margin_and_is_released() {
    let now = Instant::now();
    let mut animator = Animator::new();
    let block = Rectangle {
        x: 100.0,
        y: 1000.0,
        width: 400.0,
        height: 100.0,
    };
    assert!(animator.register("card", block));

    // Viewport bottom is 200 px above the block.
    assert!(animator.on_scroll(viewport_at(0.0), now).is_empty());

    // Bottom edge at 1050 but the 50 px margin trims the root to 1000.
    assert!(animator.on_scroll(viewport_at(250.0), now).is_empty());
    assert!(!animator.is_revealed("card"));

    let revealed = animator.on_scroll(viewport_at(300.0), now);
    assert_eq!(revealed, vec!["card"]);
    assert!(animator.is_revealed("card"));
    assert!(!animator.is_observed("card"));

    // Scrolling away never hides it again.
    assert!(animator.on_scroll(viewport_at(0.0), now + ms(50)).is_empty());
    assert!(animator.is_revealed("card"));
}

#[test]
fn page_blocks_reveal_while_scrolling_down() {
    let now = Instant::now();
    let layout = Layout::compute(1100.0, &Catalog::storefront());
    let mut animator = init_visibility_animator(&layout);
    let registered = animator.observed_count();

    let max = layout.max_scroll(800.0);
    let mut y = 0.0;
    while y <= max {
        animator.on_scroll(viewport_at(y), now);
        y += 100.0;
    }
    animator.on_scroll(viewport_at(max), now);

    assert!(registered > 0);
    assert_eq!(animator.observed_count(), 0);
    for (block, _) in layout.animated_blocks() {
        assert!(animator.is_revealed(block), "{block:?} never revealed");
    }
    assert!(animator.is_revealed(BlockId::ContactForm));
}

#[test]
fn navigation_targets_known_sections_only() {
    let layout = Layout::compute(1100.0, &Catalog::storefront());
    let contact = layout
        .section(SectionId::Contact)
        .copied()
        .expect("contact section");

    assert_eq!(
        scroll_to_section(&layout, "#contact", 70.0),
        Ok(contact.offset_top - 70.0)
    );
    assert_eq!(
        scroll_to_section(&layout, "#missing", 70.0),
        Err(Error::MissingAnchor("#missing".to_string()))
    );
}
