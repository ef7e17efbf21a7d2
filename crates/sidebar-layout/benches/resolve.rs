//! Resolver benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sidebar_config::default_config;
use sidebar_core::{DeviceClass, Side};
use sidebar_layout::WidgetManager;

fn enabled_widgets(c: &mut Criterion) {
    let manager = WidgetManager::new(default_config());
    c.bench_function("enabled_widgets_both_sides", |b| {
        b.iter(|| manager.enabled_widgets(black_box(None)).len())
    });
    c.bench_function("side_has_visible_widget", |b| {
        b.iter(|| manager.side_has_visible_widget(black_box(Side::Left), black_box(DeviceClass::Mobile)))
    });
}

fn page_plan(c: &mut Criterion) {
    let manager = WidgetManager::new(default_config());
    c.bench_function("page_plan_article", |b| {
        b.iter(|| manager.page_plan(black_box(true)))
    });
    c.bench_function("page_plan_listing", |b| {
        b.iter(|| manager.page_plan(black_box(false)))
    });
}

criterion_group!(benches, enabled_widgets, page_plan);
criterion_main!(benches);
