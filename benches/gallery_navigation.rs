// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation.
//!
//! Measures the performance of:
//! - Viewer stepping (next/previous with wrap)
//! - Full component updates (keyboard navigation through the focus trap)
//! - Swipe gesture resolution

use criterion::{criterion_group, criterion_main, Criterion};
use portfolio_lens::domain::gallery::{GalleryItem, GalleryViewer, ImageRef};
use portfolio_lens::domain::ui::{FocusDelay, SwipeThreshold};
use portfolio_lens::ui::focus::{KeyInput, PageTarget};
use portfolio_lens::ui::gallery::{Message, State};
use portfolio_lens::ui::widgets::Gesture;
use std::hint::black_box;
use std::sync::Arc;

const IMAGE_COUNT: usize = 24;

fn sample_item() -> Arc<GalleryItem> {
    let gallery = (0..IMAGE_COUNT)
        .map(|i| ImageRef::new(format!("https://res.cloudinary.com/demo/project-{i}.png")))
        .collect();
    // A non-empty gallery always constructs.
    Arc::new(GalleryItem::new("Benchmark Project", gallery).unwrap())
}

/// Pure state machine stepping, no focus or gesture bookkeeping.
fn bench_viewer_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let item = sample_item();

    group.bench_function("viewer_next_full_cycle", |b| {
        let mut viewer = GalleryViewer::new();
        viewer.open(Arc::clone(&item));
        b.iter(|| {
            for _ in 0..IMAGE_COUNT {
                black_box(viewer.next());
            }
        });
    });

    group.bench_function("viewer_neighbors", |b| {
        let mut viewer = GalleryViewer::new();
        viewer.open(Arc::clone(&item));
        b.iter(|| black_box(viewer.neighbors().len()));
    });

    group.finish();
}

/// Component-level updates as the app drives them.
fn bench_component_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let item = sample_item();

    group.bench_function("keyboard_arrow_cycle", |b| {
        let mut state = State::new(SwipeThreshold::default(), FocusDelay::default());
        state.open(Arc::clone(&item), Some(PageTarget::Card(0)));
        b.iter(|| {
            for _ in 0..IMAGE_COUNT {
                black_box(state.update(Message::Key(KeyInput::ArrowRight)));
            }
        });
    });

    group.bench_function("tab_cycle", |b| {
        let mut state = State::new(SwipeThreshold::default(), FocusDelay::default());
        state.open(Arc::clone(&item), Some(PageTarget::Card(0)));
        b.iter(|| {
            for _ in 0..(IMAGE_COUNT + 3) {
                black_box(state.update(Message::Key(KeyInput::Tab { shift: false })));
            }
        });
    });

    group.bench_function("swipe_gesture", |b| {
        let mut state = State::new(SwipeThreshold::default(), FocusDelay::default());
        state.open(Arc::clone(&item), Some(PageTarget::Card(0)));
        b.iter(|| {
            state.update(Message::Swipe(Gesture::Started(300.0)));
            state.update(Message::Swipe(Gesture::Moved(240.0)));
            state.update(Message::Swipe(Gesture::Moved(180.0)));
            black_box(state.update(Message::Swipe(Gesture::Ended(Some(180.0)))))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_viewer_step, bench_component_update);
criterion_main!(benches);
