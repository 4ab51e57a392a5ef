use chart_vega::api::{Converter, ConverterConfig};
use chart_vega::core::{
    DataPoint, PlotKind, PointCollection, SceneChart, ShapePrimitive, classify, extract,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn histogram_scene(bins: usize) -> SceneChart {
    SceneChart::new().with_shapes(
        (0..bins).map(|i| ShapePrimitive::rectangle(i as f64 * 0.25, 0.0, 0.25, (i % 17) as f64)),
    )
}

fn bench_classify_histogram_2k(c: &mut Criterion) {
    let scene = histogram_scene(2_000);
    c.bench_function("classify_histogram_2k", |b| {
        b.iter(|| {
            let kind = classify(black_box(&scene));
            assert_eq!(kind, PlotKind::Histogram);
        })
    });
}

fn bench_extract_scatter_10k(c: &mut Criterion) {
    let offsets: Vec<DataPoint> = (0..10_000)
        .map(|i| DataPoint::new(i as f64, (i as f64).sin()))
        .collect();
    let scene = SceneChart::new()
        .with_point_collection(PointCollection::new(offsets).with_sizes(vec![12.0]));

    c.bench_function("extract_scatter_10k", |b| {
        b.iter(|| {
            let _ = extract(black_box(&scene), PlotKind::Scatter).expect("extract");
        })
    });
}

fn bench_histogram_to_spec_2k(c: &mut Criterion) {
    let scene = histogram_scene(2_000);
    let converter = Converter::new(ConverterConfig::default()).expect("converter");

    c.bench_function("histogram_to_spec_2k", |b| {
        b.iter(|| {
            let _ = converter.to_spec(black_box(&scene)).expect("spec");
        })
    });
}

criterion_group!(
    benches,
    bench_classify_histogram_2k,
    bench_extract_scatter_10k,
    bench_histogram_to_spec_2k
);
criterion_main!(benches);
