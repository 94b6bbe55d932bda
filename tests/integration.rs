// SPDX-License-Identifier: MPL-2.0
use lexfolio::app::{Route, Screen};
use lexfolio::config::{self, Config};
use lexfolio::content::SiteContent;
use lexfolio::i18n::fluent::I18n;
use lexfolio::ui::accordion::{Accordion, AccordionSettings, PanelSpec};
use lexfolio::ui::carousel::{Carousel, CarouselSettings};
use lexfolio::ui::contact::{phone, whatsapp};
use lexfolio::ui::layout::SectionId;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &config_path).expect("Failed to write config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("nav-contact"), "Contact");

    let mut portuguese = Config::default();
    portuguese.general.language = Some("pt-BR".to_string());
    config::save_to_path(&portuguese, &config_path).expect("Failed to write config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "pt-BR");
    assert_eq!(i18n.tr("nav-contact"), "Contato");
}

#[test]
fn test_partial_config_keeps_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    std::fs::write(&config_path, "[carousel]\nautoplay_interval_ms = 8000\n")
        .expect("Failed to write config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.carousel.autoplay_interval(), Duration::from_millis(8000));
    assert_eq!(loaded.accordion, Config::default().accordion);
    assert!(loaded.reveal.animations_enabled());
}

#[test]
fn test_content_override_replaces_bundled_content() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("content.toml"),
        r#"
[firm]
name = "Escritório Teste"

[[articles]]
title = "Pergunta"
category = "geral"
body = "Resposta."
"#,
    )
    .expect("Failed to write content");

    let (content, warning) = SiteContent::load(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(content.firm.name, "Escritório Teste");
    assert_eq!(content.articles.len(), 1);
    assert!(content.specialties.is_empty());
}

#[test]
fn test_broken_content_override_falls_back() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("content.toml"), "[[articles]\n").expect("write");

    let (content, warning) = SiteContent::load(Some(dir.path().to_path_buf()));
    assert_eq!(warning.as_deref(), Some("notification-content-malformed"));
    assert_eq!(content, SiteContent::bundled().expect("bundled content parses"));
}

#[test]
fn test_carousel_index_stays_in_range_across_resizes() {
    let now = Instant::now();
    for total in 0..9 {
        for width in [375.0, 900.0, 1440.0] {
            let mut carousel = Carousel::new(total, width, now, CarouselSettings::default());
            let per_view = carousel.cards_per_view().count();
            let expected_max = total.div_ceil(per_view).saturating_sub(1);
            assert_eq!(carousel.max_index(), expected_max);

            for step in 0..12 {
                let at = now + Duration::from_millis(step * 700);
                match step % 4 {
                    0 | 1 => {
                        carousel.next_slide(at);
                    }
                    2 => {
                        carousel.prev_slide(at);
                    }
                    _ => carousel.relayout([1440.0, 375.0, 900.0][(step as usize / 4) % 3]),
                }
                assert!(carousel.current_index() <= carousel.max_index());
            }
        }
    }
}

#[test]
fn test_accordion_keeps_at_most_one_panel_open() {
    let now = Instant::now();
    let panels = (0..6)
        .map(|index| PanelSpec::new(if index % 2 == 0 { "etica" } else { "saude" }, 120.0))
        .collect();
    let mut accordion = Accordion::new(panels, AccordionSettings::default());

    for (step, index) in [0, 3, 3, 5, 1, 1, 2].into_iter().enumerate() {
        accordion.toggle(index, now + Duration::from_millis(step as u64 * 50));
        assert!(accordion.open_count() <= 1);
    }
}

#[test]
fn test_deep_link_route_opens_one_panel() {
    let route = Route::parse("blog.html#open=2");
    assert_eq!(route.screen, Screen::Blog);
    let fragment = route.fragment.expect("fragment kept for the blog");

    let now = Instant::now();
    let panels = (0..6).map(|_| PanelSpec::new("geral", 80.0)).collect();
    let mut accordion = Accordion::new(panels, AccordionSettings::default());
    assert_eq!(accordion.apply_deep_link(&fragment, now), Some(2));

    accordion.tick(now + Duration::from_millis(500));
    assert!(accordion.is_open(2));
    assert_eq!(accordion.open_count(), 1);
}

#[test]
fn test_home_route_targets_section() {
    let route = Route::parse("#contato");
    assert_eq!(route.screen, Screen::Home);
    assert_eq!(route.section, Some(SectionId::Contact));
}

#[test]
fn test_whatsapp_link_carries_masked_number() {
    let masked = phone::mask("75991804444");
    assert_eq!(masked, "(75) 99180-4444");
    assert_eq!(phone::mask(&masked), masked);

    let url = whatsapp::whatsapp_url("+55 (75) 99180-4444", "Olá, tudo bem?");
    assert!(url.starts_with("https://wa.me/5575991804444?text="));
    assert!(!url.contains(' '));
}
