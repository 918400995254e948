use criterion::{Criterion, criterion_group, criterion_main};
use datepick_rs::api::{TimelineConfig, TimelineSelector};
use datepick_rs::core::{AxisTransform, CalendarDate, Orientation, Point, Viewport, segment_index};
use datepick_rs::render::NullRenderer;
use std::hint::black_box;

fn bench_axis_ratio_round_trip(c: &mut Criterion) {
    let transform =
        AxisTransform::new(Orientation::Horizontal, false, 24.0, 1872.0).expect("valid axis");

    c.bench_function("axis_ratio_round_trip", |b| {
        b.iter(|| {
            let ratio = transform.pointer_to_ratio(black_box(Point::new(731.5, 100.0)));
            let _ = transform.ratio_to_coord(black_box(ratio));
        })
    });
}

fn bench_pointer_to_year_index_100y(c: &mut Criterion) {
    let transform =
        AxisTransform::new(Orientation::Horizontal, true, 24.0, 1872.0).expect("valid axis");

    c.bench_function("pointer_to_year_index_100y", |b| {
        b.iter(|| {
            let ratio = transform.pointer_to_ratio(black_box(Point::new(1234.0, 100.0)));
            let _ = segment_index(black_box(ratio), black_box(100));
        })
    });
}

fn bench_timeline_scene_build_35y(c: &mut Criterion) {
    let config = TimelineConfig::new(
        Viewport::new(1920, 200),
        CalendarDate::new(1990, 1, 1).expect("valid date"),
    )
    .with_end_date(CalendarDate::new(2024, 12, 31).expect("valid date"));
    let mut selector = TimelineSelector::new(NullRenderer::default(), config).expect("selector");
    let bounds = selector.axis_bounds();
    selector.pointer_move(bounds.x + bounds.width / 2.0, bounds.y + bounds.height / 2.0);

    c.bench_function("timeline_scene_build_35y", |b| {
        b.iter(|| {
            let frame = black_box(&selector).build_scene();
            black_box(frame.lines.len());
        })
    });
}

criterion_group!(
    benches,
    bench_axis_ratio_round_trip,
    bench_pointer_to_year_index_100y,
    bench_timeline_scene_build_35y
);
criterion_main!(benches);
