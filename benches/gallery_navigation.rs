// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for viewer transitions.
//!
//! Measures the performance of:
//! - Wrapping navigation over a large gallery with ineligible gaps
//! - A burst of wheel zoom and pan transitions

use criterion::{criterion_group, criterion_main, Criterion};
use folio_lens::gallery::{Gallery, GalleryItem};
use folio_lens::ui::state::{Transition, ViewerState};
use iced::Vector;
use std::hint::black_box;

/// Every third item lacks dimensions and is skipped by navigation.
fn sparse_gallery(len: usize) -> Gallery {
    Gallery::new(
        (0..len)
            .map(|i| GalleryItem {
                url: Some(format!("{i}.jpg")),
                width: (i % 3 != 0).then_some(1600),
                height: Some(900),
                ..GalleryItem::default()
            })
            .collect(),
    )
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");
    let gallery = sparse_gallery(1_000);

    group.bench_function("next_full_cycle", |b| {
        b.iter(|| {
            let mut state = ViewerState::default();
            state.apply(Transition::Open(1), &gallery);
            for _ in 0..gallery.eligible_count() {
                state.apply(Transition::Next, &gallery);
            }
            black_box(state);
        });
    });

    group.bench_function("previous_full_cycle", |b| {
        b.iter(|| {
            let mut state = ViewerState::default();
            state.apply(Transition::Open(1), &gallery);
            for _ in 0..gallery.eligible_count() {
                state.apply(Transition::Previous, &gallery);
            }
            black_box(state);
        });
    });

    group.finish();
}

fn bench_zoom_and_pan(c: &mut Criterion) {
    let gallery = sparse_gallery(8);

    c.bench_function("wheel_and_pan_burst", |b| {
        b.iter(|| {
            let mut state = ViewerState::default();
            state.apply(Transition::Open(1), &gallery);
            for step in 0..200 {
                let delta = if step % 2 == 0 { -120.0 } else { 80.0 };
                state.apply(Transition::Wheel(black_box(delta)), &gallery);
                state.apply(Transition::PanBy(Vector::new(1.0, -1.0)), &gallery);
            }
            black_box(state);
        });
    });
}

criterion_group!(benches, bench_navigation, bench_zoom_and_pan);
criterion_main!(benches);
