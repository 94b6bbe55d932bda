// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the interactive engines.
//!
//! Measures the performance of:
//! - Carousel paging with autoplay deadlines
//! - Accordion toggling and filtering
//! - Visibility checks over the whole home page

use criterion::{criterion_group, criterion_main, Criterion};
use lexfolio::config::Config;
use lexfolio::content::SiteContent;
use lexfolio::ui::accordion::{Accordion, AccordionSettings, PanelSpec};
use lexfolio::ui::carousel::{Carousel, CarouselSettings};
use lexfolio::ui::home;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark a full round of carousel navigation.
fn bench_carousel(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_navigation");

    group.bench_function("carousel_cycle", |b| {
        let now = Instant::now();
        b.iter(|| {
            let mut carousel = Carousel::new(12, 1440.0, now, CarouselSettings::default());
            for step in 0..24u64 {
                let at = now + Duration::from_millis(step * 100);
                carousel.next_slide(at);
                carousel.tick(at);
            }
            black_box(carousel.current_index());
        });
    });

    group.finish();
}

/// Benchmark toggling every panel and switching categories.
fn bench_accordion(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_navigation");

    group.bench_function("accordion_toggle_filter", |b| {
        let now = Instant::now();
        b.iter(|| {
            let panels = (0..24)
                .map(|index| PanelSpec::new(["etica", "saude", "planos"][index % 3], 240.0))
                .collect();
            let mut accordion = Accordion::new(panels, AccordionSettings::default());
            for index in 0..24 {
                accordion.toggle(index, now);
            }
            accordion.select_category("saude", now);
            black_box(accordion.open_count());
        });
    });

    group.finish();
}

/// Benchmark the home page reacting to a long scroll.
fn bench_home_scroll(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_navigation");
    let content = SiteContent::bundled().unwrap_or_default();
    let config = Config::default();

    group.bench_function("home_build_and_tick", |b| {
        let now = Instant::now();
        b.iter(|| {
            let mut state = home::State::new(&content, &config, iced::Size::new(1280.0, 800.0), now);
            state.scroll_to_section(lexfolio::ui::layout::SectionId::Contact, now);
            for frame in 0..30u64 {
                black_box(state.tick(now + Duration::from_millis(frame * 16)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_carousel, bench_accordion, bench_home_scroll);
criterion_main!(benches);
